//! Filename validation for new memos.
//!
//! A memo filename is written verbatim below the memo directory, so it must:
//! - Contain something other than whitespace
//! - Be at most [`MAX_FILENAME_LEN`] bytes long
//! - Not contain any of the path or shell-unsafe characters in [`INVALID_CHARS`]
//! - Not be `.` or `..`, which name directories rather than files

use crate::error::{MemoError, Result};

/// Maximum filename length, in bytes.
pub const MAX_FILENAME_LEN: usize = 30;

/// Characters that may not appear anywhere in a filename.
pub const INVALID_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Names that resolve to the memo directory itself or its parent.
const RESERVED_NAMES: &[&str] = &[".", ".."];

/// Validates a memo filename. Checks run in order and the first failure wins.
///
/// # Examples
/// ```
/// use memo::validation::validate_filename;
///
/// assert!(validate_filename("note.md").is_ok());
/// assert!(validate_filename("2024-review.txt").is_ok());
///
/// assert!(validate_filename("").is_err());
/// assert!(validate_filename("   ").is_err());
/// assert!(validate_filename("a/b.md").is_err());
/// assert!(validate_filename("..").is_err());
/// assert!(validate_filename("thisisaveryverylongfilenameexceedingthirty").is_err());
/// ```
pub fn validate_filename(name: &str) -> Result<()> {
    validate_not_empty(name)?;
    validate_length(name)?;
    validate_characters(name)?;
    validate_not_reserved(name)
}

pub fn validate_not_empty(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(MemoError::EmptyName);
    }
    Ok(())
}

pub fn validate_length(name: &str) -> Result<()> {
    if name.len() > MAX_FILENAME_LEN {
        return Err(MemoError::NameTooLong {
            len: name.len(),
            max: MAX_FILENAME_LEN,
        });
    }
    Ok(())
}

pub fn validate_characters(name: &str) -> Result<()> {
    match name.chars().find(|c| INVALID_CHARS.contains(c)) {
        Some(ch) => Err(MemoError::InvalidCharacter(ch)),
        None => Ok(()),
    }
}

pub fn validate_not_reserved(name: &str) -> Result<()> {
    if RESERVED_NAMES.contains(&name) {
        return Err(MemoError::ReservedName(name.to_string()));
    }
    Ok(())
}
