/// A single dictionary entry, parsed from its raw JSON string value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Plain text to insert.
    Word(String),
    /// A command entry (`=undo`); only `=undo` is currently recognized.
    Command(Command),
    /// A suffix entry (`{^}...`): attaches to the previous translation's text with no space.
    Suffix(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Undo,
}

impl Entry {
    /// Parse the raw entry text found in a dictionary JSON file.
    pub fn parse(raw: &str) -> Self {
        if let Some(rest) = raw.strip_prefix('=') {
            match rest {
                "undo" => Entry::Command(Command::Undo),
                // Unknown commands are treated as literal text: the distilled spec names only
                // `=undo`, and silently mistranslating an unrecognized command would be worse
                // than just typing it out.
                _ => Entry::Word(raw.to_string()),
            }
        } else if let Some(rest) = raw.strip_prefix("{^}") {
            Entry::Suffix(rest.to_string())
        } else {
            Entry::Word(raw.to_string())
        }
    }

    pub fn raw(&self) -> String {
        match self {
            Entry::Word(w) => w.clone(),
            Entry::Command(Command::Undo) => "=undo".to_string(),
            Entry::Suffix(s) => format!("{{^}}{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_word_entries() {
        assert_eq!(Entry::parse("hello"), Entry::Word("hello".to_string()));
    }

    #[test]
    fn parses_undo_command() {
        assert_eq!(Entry::parse("=undo"), Entry::Command(Command::Undo));
    }

    #[test]
    fn unknown_command_falls_back_to_word() {
        assert_eq!(Entry::parse("=frobnicate"), Entry::Word("=frobnicate".to_string()));
    }

    #[test]
    fn parses_suffix_entries() {
        assert_eq!(Entry::parse("{^}ing"), Entry::Suffix("ing".to_string()));
    }
}
