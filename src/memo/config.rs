use crate::error::{MemoError, Result};
use directories::BaseDirs;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory created below the config root.
pub const APP_DIR_NAME: &str = "go-memo";
/// Subdirectory of the app directory holding the notes themselves.
pub const MEMO_DIR_NAME: &str = "memo";
/// Optional user template, looked up in the app directory.
pub const TEMPLATE_FILENAME: &str = "template.md";

/// Snapshot of the environment variables memo depends on.
///
/// Everything below the CLI takes one of these instead of reading the process
/// environment, so tests can point the pipeline at a temp dir.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoEnv {
    /// `$XDG_CONFIG_HOME`
    pub xdg_config_home: Option<PathBuf>,
    /// `$HOME`, or the platform home directory when unset
    pub home: Option<PathBuf>,
    /// `$EDITOR`
    pub editor: Option<String>,
}

impl MemoEnv {
    /// Reads the current process environment. Empty variables count as unset.
    pub fn from_process() -> Self {
        let home = non_empty_var("HOME")
            .map(PathBuf::from)
            .or_else(|| BaseDirs::new().map(|bd| bd.home_dir().to_path_buf()));

        Self {
            xdg_config_home: non_empty_var("XDG_CONFIG_HOME").map(PathBuf::from),
            home,
            editor: non_empty_var("EDITOR"),
        }
    }

    /// Base directory for configuration: `$XDG_CONFIG_HOME`, else `$HOME/.config`.
    pub fn config_root(&self) -> Result<PathBuf> {
        if let Some(xdg) = self.xdg_config_home.as_ref().filter(|p| !p.as_os_str().is_empty()) {
            return Ok(xdg.clone());
        }
        self.home
            .as_ref()
            .filter(|p| !p.as_os_str().is_empty())
            .map(|home| home.join(".config"))
            .ok_or(MemoError::HomeNotFound)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

/// Filesystem locations used by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoPaths {
    pub config_dir: PathBuf,
    pub memo_dir: PathBuf,
}

impl MemoPaths {
    /// Computes the paths for `env` without touching the filesystem.
    pub fn for_env(env: &MemoEnv) -> Result<Self> {
        let config_dir = env.config_root()?.join(APP_DIR_NAME);
        let memo_dir = config_dir.join(MEMO_DIR_NAME);
        Ok(Self {
            config_dir,
            memo_dir,
        })
    }

    /// Computes the paths for `env` and creates both directories if missing.
    pub fn resolve(env: &MemoEnv) -> Result<Self> {
        let paths = Self::for_env(env)?;
        ensure_dir(&paths.config_dir)?;
        ensure_dir(&paths.memo_dir)?;
        Ok(paths)
    }

    pub fn template_path(&self) -> PathBuf {
        self.config_dir.join(TEMPLATE_FILENAME)
    }

    pub fn memo_path(&self, filename: &str) -> PathBuf {
        self.memo_dir.join(filename)
    }
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    debug!(path = %dir.display(), "creating directory");
    fs::create_dir_all(dir).map_err(|source| MemoError::DirectoryCreation {
        path: dir.to_path_buf(),
        source,
    })
}
