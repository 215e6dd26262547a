use chrono::{DateTime, Local};
use serde::Serialize;

/// strftime pattern for [`Memo::date`], e.g. `2024-01-15-14:30:05`.
pub const DATE_FORMAT: &str = "%Y-%m-%d-%H:%M:%S";

/// The values a template is rendered with. Field names are exposed to
/// templates as `Filename` and `Date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Memo {
    pub filename: String,
    pub date: String,
}

impl Memo {
    pub fn new(filename: impl Into<String>, created_at: DateTime<Local>) -> Self {
        Self {
            filename: filename.into(),
            date: created_at.format(DATE_FORMAT).to_string(),
        }
    }

    /// Creates a memo stamped with the current local time.
    pub fn now(filename: impl Into<String>) -> Self {
        Self::new(filename, Local::now())
    }
}
