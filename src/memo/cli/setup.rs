use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "memo", bin_name = "memo", version)]
#[command(
    about = "Create a date-stamped memo from a template and open it in $EDITOR",
    long_about = None
)]
#[command(after_help = "Memos are written to $XDG_CONFIG_HOME/go-memo/memo \
(or ~/.config/go-memo/memo). Put a template.md in the go-memo directory to \
override the built-in template; it can use {{ Filename }} and {{ Date }}.")]
pub struct Cli {
    /// Name of the memo file to create (e.g. note.md)
    pub filename: String,

    /// Print the rendered memo instead of creating it
    #[arg(short, long, conflicts_with = "no_editor")]
    pub print: bool,

    /// Create the memo without opening the editor
    #[arg(long)]
    pub no_editor: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
