//! The steno outline dictionary: entry parsing and the directory-based JSON loader described in
//! the external interfaces section of the spec.

mod dictionary;
mod entry;
mod load;

pub use dictionary::Dictionary;
pub use entry::{Command as EntryCommand, Entry};
pub use load::{load_dir, LoadError};
