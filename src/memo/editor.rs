use crate::error::{MemoError, Result};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use tracing::{debug, warn};

/// Opens `file_path` in `editor` and waits for it to exit.
///
/// The editor inherits this process's stdin, stdout and stderr. Its exit
/// status is returned as-is: a non-zero exit is logged, not treated as a
/// failure. Only a missing editor or a failed spawn/wait is an error.
pub fn launch(editor: Option<&str>, file_path: &Path) -> Result<ExitStatus> {
    let editor = editor
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .ok_or(MemoError::EditorNotConfigured)?;

    debug!(editor, path = %file_path.display(), "launching editor");
    let status = Command::new(editor)
        .arg(file_path)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| MemoError::EditorLaunch {
            editor: editor.to_string(),
            source,
        })?;

    if !status.success() {
        warn!(editor, %status, "editor exited with non-zero status");
    }
    Ok(status)
}
