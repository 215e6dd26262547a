use colored::Colorize;
use memo::api::{CmdMessage, MessageLevel};

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
        }
    }
}

/// Prints a rendered memo verbatim, without styling, so it can be piped.
pub(super) fn print_rendered(rendered: &str) {
    print!("{}", rendered);
    if !rendered.ends_with('\n') {
        println!();
    }
}
