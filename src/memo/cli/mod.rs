//! # CLI Behavior
//!
//! One client of the memo library. For the overall architecture, see the
//! crate-level documentation of `memo`.
//!
//! ```text
//! memo note.md              create memo/note.md, then open it in $EDITOR
//! memo --no-editor note.md  create it and stop
//! memo --print note.md      print what would be written; touch nothing
//! ```
//!
//! ## Module Structure
//!
//! - `commands`: Dispatch, logging setup and per-mode handlers
//! - `render`: Output formatting (colored messages, raw memo text)
//! - `setup`: Argument parsing via clap

mod commands;
mod render;
pub mod setup;

pub use commands::run;
