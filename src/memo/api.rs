//! # API Facade
//!
//! `MemoApi` is the single entry point for memo operations. It owns the
//! [`MemoEnv`] snapshot and runs each pipeline stage in order:
//!
//! ```text
//! validate → locate config → resolve template → create file → launch editor
//! ```
//!
//! Every stage is a hard gate: the first error is returned and nothing after
//! it runs. Nothing already done is rolled back, so a memo created before the
//! editor fails to launch stays on disk.
//!
//! The facade does no I/O on stdout/stderr and never exits the process; it
//! returns [`CmdResult`] values for the CLI to render.

use crate::commands;
use crate::config::{MemoEnv, MemoPaths};
use crate::error::Result;
use crate::model::Memo;
use crate::template::MemoTemplate;
use crate::validation::validate_filename;
use std::path::Path;
use tracing::debug;

pub struct MemoApi {
    env: MemoEnv,
}

impl MemoApi {
    pub fn new(env: MemoEnv) -> Self {
        Self { env }
    }

    /// Validates `filename`, prepares the config directories and writes a new
    /// memo rendered from the active template.
    pub fn create_memo(&self, filename: &str) -> Result<commands::CmdResult> {
        validate_filename(filename)?;
        let paths = MemoPaths::resolve(&self.env)?;
        debug!(memo_dir = %paths.memo_dir.display(), "config located");
        let template = MemoTemplate::resolve(&paths.config_dir)?;
        let memo = Memo::now(filename);
        commands::create::run(&paths, &template, &memo)
    }

    /// Renders the memo `create_memo` would write, without touching disk.
    pub fn preview_memo(&self, filename: &str) -> Result<commands::CmdResult> {
        validate_filename(filename)?;
        let paths = MemoPaths::for_env(&self.env)?;
        let template = MemoTemplate::resolve(&paths.config_dir)?;
        let memo = Memo::now(filename);
        commands::preview::run(&paths, &template, &memo)
    }

    /// Opens `path` in `$EDITOR`, blocking until the editor exits.
    pub fn open_memo(&self, path: &Path) -> Result<commands::CmdResult> {
        commands::open::run(self.env.editor.as_deref(), path)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
