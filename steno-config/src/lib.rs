mod config;

pub use config::{Config, ConfigError, CustomKeyZone, OutputKind};
