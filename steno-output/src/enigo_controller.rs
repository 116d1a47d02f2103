use enigo::{Enigo, Key, KeyboardControllable};
use steno_core::{count_chars, Command, Controller};
use std::{thread, time::Duration};

/// Backspace delay is irrelevant in practice since enigo already imposes its own ~20ms delay per
/// key press, but the teacher crate this is grounded on keeps it configurable, so this does too.
const BACKSPACE_DELAY: Duration = Duration::from_millis(2);
const KEY_DELAY: Duration = Duration::from_millis(5);

/// Injects keystrokes into the foreground application via `enigo`.
pub struct EnigoController {
    enigo: Enigo,
}

impl Default for EnigoController {
    fn default() -> Self {
        Self::new()
    }
}

impl EnigoController {
    pub fn new() -> Self {
        Self { enigo: Enigo::new() }
    }

    fn type_with_delay(&mut self, text: &str, delay: Duration) {
        for c in text.chars() {
            self.enigo.key_sequence(&c.to_string());
            thread::sleep(delay);
        }
    }

    fn backspace(&mut self, count: usize, delay: Duration) {
        for _ in 0..count {
            self.enigo.key_click(Key::Backspace);
            thread::sleep(delay);
        }
    }
}

impl Controller for EnigoController {
    fn dispatch(&mut self, command: Command) {
        match command {
            Command::Write(text) => self.type_with_delay(&text, KEY_DELAY),
            Command::Undo(text) => self.backspace(count_chars(&text), BACKSPACE_DELAY),
        }
    }
}
