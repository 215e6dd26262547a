//! The `memo` binary. All behavior lives in the library and in `cli/`; this
//! file only invokes `cli::run()` and turns an error into exit status 1.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
