use crate::convert::{ConvertError, Unit};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Units used when the caller doesn't pick any
    #[serde(default)]
    pub defaults: DefaultUnits,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct DefaultUnits {
    #[serde(default = "default_source_unit")]
    pub from: Unit,

    #[serde(default = "default_target_unit")]
    pub to: Unit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            from: default_source_unit(),
            to: default_target_unit(),
        }
    }
}

fn default_source_unit() -> Unit {
    Unit::Kilometer
}

fn default_target_unit() -> Unit {
    Unit::Mile
}

impl Config {
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConvertError> {
        let path = path.as_ref();
        debug!("loading config from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConvertError::ConfigError(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConvertError> {
        toml::from_str(content).map_err(|e| ConvertError::ConfigError(e.to_string()))
    }

    pub fn empty() -> Self {
        Self {
            defaults: DefaultUnits::default(),
        }
    }
}
