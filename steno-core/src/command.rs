/// What the translator asks the output sink to do.
///
/// This is the narrowed command vocabulary this crate needs: unlike the richer command sets some
/// steno engines carry (raw key combos, shell dispatch, debug prints), only text is ever written
/// or undone here, because formatting and OS-level key injection are out of scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append this text to the output.
    Write(String),
    /// Delete the last `count_chars(text)` characters (Unicode scalar values) from the output.
    Undo(String),
}

/// Number of Unicode scalar values (not bytes) a string occupies in the output stream.
pub fn count_chars(text: &str) -> usize {
    text.chars().count()
}
