//! # Memo Templates
//!
//! New memos are rendered from a minijinja (Jinja2-compatible) template. The
//! template sees a [`Memo`] and can use two variables:
//!
//! - `{{ Filename }}`: the filename given on the command line
//! - `{{ Date }}`: the creation time, formatted as `YYYY-MM-DD-HH:MM:SS`
//!
//! A user template at `<config dir>/template.md` replaces the built-in one
//! whenever that file exists. The built-in template is compiled into the binary
//! from `templates/default.md`.
//!
//! Go `text/template` style field references, `{{.Filename}}` and `{{.Date}}`,
//! are rewritten to the Jinja form before compiling, so `template.md` files
//! written in that style keep working.
//!
//! Templates are compiled when they are resolved, so syntax errors surface
//! before anything is written. Rendering is strict: referencing a variable
//! other than the two above is an error rather than an empty string.

use crate::error::{MemoError, Result};
use crate::model::Memo;
use minijinja::{Environment, UndefinedBehavior};
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::TEMPLATE_FILENAME;

pub const DEFAULT_TEMPLATE: &str = include_str!("templates/default.md");

const TEMPLATE_NAME: &str = "memo";

static GO_FIELD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{\s*\.(Filename|Date)\s*\}\}").expect("field pattern is valid")
});

/// Rewrites `{{.Filename}}` / `{{ .Date }}` to `{{ Filename }}` / `{{ Date }}`.
fn normalize_go_fields(source: &str) -> Cow<'_, str> {
    GO_FIELD.replace_all(source, "{{ ${1} }}")
}

/// Where a template's source came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateOrigin {
    Builtin,
    File(PathBuf),
}

impl fmt::Display for TemplateOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateOrigin::Builtin => write!(f, "built-in template"),
            TemplateOrigin::File(path) => write!(f, "template {}", path.display()),
        }
    }
}

/// A compiled memo template.
pub struct MemoTemplate {
    env: Environment<'static>,
    origin: TemplateOrigin,
}

impl fmt::Debug for MemoTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoTemplate")
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}

impl MemoTemplate {
    /// Picks `<config_dir>/template.md` if it exists, else the built-in template.
    pub fn resolve(config_dir: &Path) -> Result<Self> {
        let override_path = config_dir.join(TEMPLATE_FILENAME);
        if override_path.is_file() {
            debug!(path = %override_path.display(), "using user template");
            Self::from_file(&override_path)
        } else {
            debug!("using built-in template");
            Self::builtin()
        }
    }

    pub fn builtin() -> Result<Self> {
        Self::compile(DEFAULT_TEMPLATE.to_string(), TemplateOrigin::Builtin)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|source| MemoError::TemplateRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::compile(source, TemplateOrigin::File(path.to_path_buf()))
    }

    /// Compiles `source`. Fails with [`MemoError::TemplateParse`] on bad syntax.
    pub fn compile(source: String, origin: TemplateOrigin) -> Result<Self> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        let source = normalize_go_fields(&source).into_owned();
        env.add_template_owned(TEMPLATE_NAME, source)
            .map_err(|source| MemoError::TemplateParse {
                origin: origin.to_string(),
                source,
            })?;
        Ok(Self { env, origin })
    }

    pub fn origin(&self) -> &TemplateOrigin {
        &self.origin
    }

    pub fn render(&self, memo: &Memo) -> Result<String> {
        let tmpl = self
            .env
            .get_template(TEMPLATE_NAME)
            .map_err(MemoError::TemplateRender)?;
        tmpl.render(memo).map_err(MemoError::TemplateRender)
    }
}
