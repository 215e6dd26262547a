use crate::commands::{CmdMessage, CmdResult};
use crate::config::MemoPaths;
use crate::error::Result;
use crate::model::Memo;
use crate::template::MemoTemplate;

/// Renders the memo without writing it. Reports whether creating it for real
/// would collide with an existing file.
pub fn run(paths: &MemoPaths, template: &MemoTemplate, memo: &Memo) -> Result<CmdResult> {
    let rendered = template.render(memo)?;
    let mut result = CmdResult::default();

    let target = paths.memo_path(&memo.filename);
    if target.exists() {
        result.add_message(CmdMessage::warning(format!(
            "{} already exists",
            target.display()
        )));
    }
    Ok(result.with_rendered(rendered))
}
