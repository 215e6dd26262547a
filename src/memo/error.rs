use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MemoError {
    #[error("Filename cannot be empty")]
    EmptyName,

    #[error("Filename is too long: {len} bytes (max {max})")]
    NameTooLong { len: usize, max: usize },

    #[error("Filename contains an invalid character: '{0}'")]
    InvalidCharacter(char),

    #[error("'{0}' is not a valid memo filename")]
    ReservedName(String),

    #[error("Could not determine the home directory")]
    HomeNotFound,

    #[error("Failed to create directory {}: {source}", .path.display())]
    DirectoryCreation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read template {}: {source}", .path.display())]
    TemplateRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {origin}: {source}")]
    TemplateParse {
        origin: String,
        source: minijinja::Error,
    },

    #[error("Failed to render template: {0}")]
    TemplateRender(#[source] minijinja::Error),

    #[error("File already exists: {}", .0.display())]
    FileAlreadyExists(PathBuf),

    #[error("Failed to create file {}: {source}", .path.display())]
    FileCreation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No editor configured. Set the $EDITOR environment variable.")]
    EditorNotConfigured,

    #[error("Failed to launch editor '{editor}': {source}")]
    EditorLaunch {
        editor: String,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, MemoError>;
