use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Top-level engine configuration, loaded from a single TOML file.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Path to the Gemini PR serial device, e.g. `/dev/ttyACM0`.
    pub serial_port: String,
    #[serde(default = "default_baud_rate")]
    pub baud_rate: u32,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Directory of `*.json` dictionary files to load, merged in sorted-filename order.
    pub dict_dir: PathBuf,
    #[serde(default)]
    pub output: OutputKind,
    /// Overrides for the Gemini PR layout-alias table, keyed by chart key name (e.g. `"Fn"`).
    /// Values are `"left:X"` / `"vowel:X"` / `"right:X"` / `"drop"`.
    #[serde(default)]
    pub custom_keys: HashMap<String, String>,
}

fn default_baud_rate() -> u32 {
    9600
}

fn default_timeout_ms() -> u64 {
    50
}

#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    #[default]
    Stdout,
    Enigo,
}

/// A parsed `custom_keys` override, independent of any particular decoder's own zone type so
/// this crate doesn't need to depend on one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomKeyZone {
    Left(char),
    Vowel(char),
    Right(char),
}

impl Config {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(path.to_path_buf(), e.to_string()))?;
        Self::parse(&raw)
    }

    /// Parse `custom_keys` into `(chart key name, override)` pairs. `None` in the override
    /// means the key is dropped outright. A malformed entry is an error rather than a silent
    /// skip, since a custom key table is deliberate operator configuration, not best-effort
    /// dictionary content.
    pub fn resolved_custom_keys(&self) -> Result<Vec<(String, Option<CustomKeyZone>)>, ConfigError> {
        self.custom_keys
            .iter()
            .map(|(name, value)| Ok((name.clone(), parse_custom_key(value)?)))
            .collect()
    }
}

fn parse_custom_key(value: &str) -> Result<Option<CustomKeyZone>, ConfigError> {
    if value == "drop" {
        return Ok(None);
    }
    let (zone, ch) = value
        .split_once(':')
        .ok_or_else(|| ConfigError::CustomKey(value.to_string()))?;
    let ch = ch
        .chars()
        .next()
        .filter(|_| ch.chars().count() == 1)
        .ok_or_else(|| ConfigError::CustomKey(value.to_string()))?;
    match zone {
        "left" => Ok(Some(CustomKeyZone::Left(ch))),
        "vowel" => Ok(Some(CustomKeyZone::Vowel(ch))),
        "right" => Ok(Some(CustomKeyZone::Right(ch))),
        _ => Err(ConfigError::CustomKey(value.to_string())),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Read(PathBuf, String),
    Parse(String),
    CustomKey(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read(p, e) => write!(f, "cannot read config file {:?}: {}", p, e),
            ConfigError::Parse(e) => write!(f, "cannot parse config: {}", e),
            ConfigError::CustomKey(v) => write!(f, "invalid custom_keys entry {:?}", v),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_config_with_defaults() {
        let config = Config::parse(
            r#"
            serial_port = "/dev/ttyACM0"
            dict_dir = "dicts"
            "#,
        )
        .unwrap();
        assert_eq!(config.baud_rate, 9600);
        assert_eq!(config.timeout_ms, 50);
        assert_eq!(config.output, OutputKind::Stdout);
        assert!(config.custom_keys.is_empty());
    }

    #[test]
    fn parses_full_config() {
        let config = Config::parse(
            r#"
            serial_port = "/dev/ttyACM0"
            baud_rate = 115200
            timeout_ms = 20
            dict_dir = "dicts"
            output = "enigo"

            [custom_keys]
            Fn = "left:#"
            res1 = "drop"
            "#,
        )
        .unwrap();
        assert_eq!(config.baud_rate, 115200);
        assert_eq!(config.output, OutputKind::Enigo);
        assert_eq!(config.custom_keys.len(), 2);
    }

    #[test]
    fn resolves_custom_keys() {
        let config = Config::parse(
            r#"
            serial_port = "/dev/ttyACM0"
            dict_dir = "dicts"

            [custom_keys]
            Fn = "left:#"
            res1 = "drop"
            "#,
        )
        .unwrap();
        let mut resolved = config.resolved_custom_keys().unwrap();
        resolved.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(
            resolved,
            vec![
                ("Fn".to_string(), Some(CustomKeyZone::Left('#'))),
                ("res1".to_string(), None),
            ]
        );
    }

    #[test]
    fn rejects_malformed_custom_key_value() {
        let config = Config::parse(
            r#"
            serial_port = "/dev/ttyACM0"
            dict_dir = "dicts"

            [custom_keys]
            Fn = "nonsense"
            "#,
        )
        .unwrap();
        assert!(config.resolved_custom_keys().is_err());
    }

    #[test]
    fn missing_required_field_is_a_parse_error() {
        assert!(Config::parse("dict_dir = \"dicts\"").is_err());
    }
}
