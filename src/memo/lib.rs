//! # Memo Architecture
//!
//! Memo creates date-stamped notes. Given a filename it validates the name,
//! renders a template into `<config root>/go-memo/memo/<filename>` and opens the
//! new file in `$EDITOR`. The logic lives in this library; the binary is a thin
//! client on top of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, sets up logging, prints results        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Holds the environment snapshot (MemoEnv)                 │
//! │  - Runs the pipeline stages in order                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - create, preview, open                                    │
//! │  - Returns CmdResult, never prints                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Ambient State
//!
//! `XDG_CONFIG_HOME`, `HOME` and `EDITOR` are read exactly once, by the CLI,
//! into a [`config::MemoEnv`]. Everything from `api.rs` inward receives that
//! struct explicitly, so tests can aim the whole pipeline at a temp directory
//! without mutating the process environment.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade the CLI talks to
//! - [`commands`]: create, preview and open
//! - [`config`]: Environment snapshot and directory layout
//! - [`validation`]: Filename rules
//! - [`template`]: Built-in and user templates (minijinja)
//! - [`model`]: The `Memo` record templates are rendered with
//! - [`editor`]: External editor launch
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod model;
pub mod template;
pub mod validation;
