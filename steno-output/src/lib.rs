//! Output sink controllers consuming the translator's `Write`/`Undo` command stream.

mod stdout;

#[cfg(feature = "enigo")]
mod enigo_controller;

pub use stdout::StdoutController;

#[cfg(feature = "enigo")]
pub use enigo_controller::EnigoController;
