use steno_core::{count_chars, Command, Controller};
use std::io::{self, Write};

/// Always-available output sink: writes to stdout, rendering an `Undo` as that many backspace
/// characters rather than actually erasing prior terminal output (a real terminal can't
/// selectively un-print). Suitable for development and for redirecting into another program's
/// stdin that does its own backspace handling.
#[derive(Debug, Default)]
pub struct StdoutController;

impl StdoutController {
    pub fn new() -> Self {
        Self
    }
}

impl Controller for StdoutController {
    fn dispatch(&mut self, command: Command) {
        match command {
            Command::Write(text) => {
                print!("{}", text);
            }
            Command::Undo(text) => {
                for _ in 0..count_chars(&text) {
                    print!("\u{8}");
                }
            }
        }
        let _ = io::stdout().flush();
    }
}
