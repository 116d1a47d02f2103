//! The Gemini PR wire decoder: turns 6-byte serial packets into `Stroke`s, and drives a serial
//! device's blocking read loop.

mod chart;
mod decode;
mod machine;

pub use chart::{LayoutAliases, ZoneKey, KEY_CHART};
pub use decode::{decode, DecodeError, PACKET_LEN};
pub use machine::{available_ports, MachineError, SerialMachine};
