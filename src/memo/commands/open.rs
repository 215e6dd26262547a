use crate::commands::{CmdMessage, CmdResult};
use crate::editor;
use crate::error::Result;
use std::path::Path;

pub fn run(editor: Option<&str>, path: &Path) -> Result<CmdResult> {
    let status = editor::launch(editor, path)?;
    let mut result = CmdResult::default();
    if !status.success() {
        result.add_message(CmdMessage::warning(format!("Editor exited with {}", status)));
    }
    Ok(result)
}
