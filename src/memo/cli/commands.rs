//! # CLI Layer
//!
//! The binary's half of memo. This is the only code that:
//! - Reads the process environment (once, into a `MemoEnv`)
//! - Installs the tracing subscriber
//! - Writes to stdout/stderr
//!
//! `run()` parses arguments, then either previews the memo (`--print`) or
//! creates it and, unless `--no-editor` is given, opens it in `$EDITOR`.
//! Errors are returned to `main`, which prints them and exits with status 1.

use super::render::{print_messages, print_rendered};
use super::setup::Cli;
use clap::Parser;
use memo::api::MemoApi;
use memo::config::MemoEnv;
use memo::error::Result;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let env = MemoEnv::from_process();
    debug!(?env, "environment");
    let api = MemoApi::new(env);

    if cli.print {
        return handle_print(&api, &cli.filename);
    }
    handle_create(&api, &cli.filename, cli.no_editor)
}

/// Logs go to stderr. `RUST_LOG` wins over `--verbose` when set.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn handle_print(api: &MemoApi, filename: &str) -> Result<()> {
    let result = api.preview_memo(filename)?;
    if let Some(rendered) = &result.rendered {
        print_rendered(rendered);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_create(api: &MemoApi, filename: &str, no_editor: bool) -> Result<()> {
    let result = api.create_memo(filename)?;
    print_messages(&result.messages);

    if no_editor {
        return Ok(());
    }
    if let Some(path) = &result.memo_path {
        let opened = api.open_memo(path)?;
        print_messages(&opened.messages);
    }
    Ok(())
}
