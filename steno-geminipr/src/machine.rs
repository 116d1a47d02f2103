use crate::chart::LayoutAliases;
use crate::decode::{decode, PACKET_LEN};
use std::fmt;
use std::io::{ErrorKind, Read};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use steno_core::Stroke;

/// Drives a Gemini PR serial device: opens the port, blocks on 6-byte reads, and decodes each
/// one into a `Stroke`. One `SerialMachine` owns one port for the lifetime of a capture session.
pub struct SerialMachine {
    port_name: String,
    baud_rate: u32,
    timeout: Duration,
}

impl SerialMachine {
    pub fn new(port_name: impl Into<String>, baud_rate: u32, timeout: Duration) -> Self {
        Self {
            port_name: port_name.into(),
            baud_rate,
            timeout,
        }
    }

    /// Open the port and read strokes until the device disconnects or `running` is cleared.
    ///
    /// `running` lets a caller on another thread stop capture idempotently: clearing the flag
    /// before this is ever called means the loop simply never starts; clearing it mid-capture
    /// breaks out on the next timeout tick. Either way this returns `Ok(())`.
    pub fn start_capture(
        &self,
        aliases: &LayoutAliases,
        running: &AtomicBool,
        mut on_stroke: impl FnMut(Stroke),
    ) -> Result<(), MachineError> {
        let mut port = serialport::new(&self.port_name, self.baud_rate)
            .timeout(self.timeout)
            .open()
            .map_err(|e| MachineError::Open(self.port_name.clone(), e.to_string()))?;

        let mut buf = [0u8; PACKET_LEN];
        while running.load(Ordering::Relaxed) {
            match port.read_exact(&mut buf) {
                Ok(()) => match decode(&buf, aliases) {
                    Ok(stroke) => on_stroke(stroke),
                    Err(e) => log::debug!("malformed gemini pr packet from {}: {}", self.port_name, e),
                },
                Err(e) if e.kind() == ErrorKind::TimedOut => continue,
                Err(e) if e.kind() == ErrorKind::BrokenPipe || e.kind() == ErrorKind::UnexpectedEof => {
                    log::info!("machine {} disconnected", self.port_name);
                    return Ok(());
                }
                Err(e) => {
                    log::warn!("error reading from {}: {}; continuing", self.port_name, e);
                    continue;
                }
            }
        }
        Ok(())
    }
}

/// Only port *opening* is fatal: once a capture loop is running, §4.2/§7 require it to log and
/// keep retrying reads rather than unwind, so this has no `Read` variant.
#[derive(Debug)]
pub enum MachineError {
    Open(String, String),
}

impl fmt::Display for MachineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MachineError::Open(port, e) => write!(f, "cannot open serial port {:?}: {}", port, e),
        }
    }
}

impl std::error::Error for MachineError {}

/// List the available serial ports, for a CLI's `--list-ports` style diagnostic.
pub fn available_ports() -> Result<Vec<String>, MachineError> {
    serialport::available_ports()
        .map(|ports| ports.into_iter().map(|p| p.port_name).collect())
        .map_err(|e| MachineError::Open("<enumeration>".to_string(), e.to_string()))
}
