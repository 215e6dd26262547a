use crate::commands::{CmdMessage, CmdResult};
use crate::config::MemoPaths;
use crate::error::{MemoError, Result};
use crate::model::Memo;
use crate::template::MemoTemplate;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

pub fn run(paths: &MemoPaths, template: &MemoTemplate, memo: &Memo) -> Result<CmdResult> {
    let path = create_file(&paths.memo_dir, &memo.filename, memo, template)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Created memo at {}",
        path.display()
    )));
    Ok(result.with_memo_path(path))
}

/// Renders `template` for `memo` into a new file `<memo_dir>/<filename>`.
///
/// Never overwrites: an existing target fails with
/// [`MemoError::FileAlreadyExists`]. The template is rendered before the file
/// is opened, so a render error leaves nothing behind. A failed write may leave
/// a truncated file.
pub fn create_file(
    memo_dir: &Path,
    filename: &str,
    memo: &Memo,
    template: &MemoTemplate,
) -> Result<PathBuf> {
    let path = memo_dir.join(filename);
    let body = template.render(memo)?;

    let creation_error = |source: std::io::Error| MemoError::FileCreation {
        path: path.clone(),
        source,
    };

    let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(MemoError::FileAlreadyExists(path.clone()));
        }
        Err(e) => return Err(creation_error(e)),
    };
    file.write_all(body.as_bytes()).map_err(creation_error)?;
    file.flush().map_err(creation_error)?;

    debug!(path = %path.display(), bytes = body.len(), "memo written");
    fs::canonicalize(&path).map_err(creation_error)
}
