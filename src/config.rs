use crate::units::{LengthUnit, RoundingMode, UnitError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// File looked up in the working directory when no config path is given
pub const DEFAULT_CONFIG_FILE: &str = "lengthconv.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Defaults {
    // Unit selected in the left picker on startup
    #[serde(default = "default_from")]
    pub from: LengthUnit,

    // Unit selected in the right picker on startup
    #[serde(default = "default_to")]
    pub to: LengthUnit,

    #[serde(default)]
    pub rounding: RoundingMode,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            from: default_from(),
            to: default_to(),
            rounding: RoundingMode::default(),
        }
    }
}

fn default_from() -> LengthUnit {
    LengthUnit::Centimeters
}

fn default_to() -> LengthUnit {
    LengthUnit::Meters
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, UnitError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            UnitError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::load_from_str(&content)?;
        debug!(path = %path.display(), "Config loaded");
        Ok(config)
    }

    pub fn load_from_str(content: &str) -> Result<Self, UnitError> {
        toml::from_str(content).map_err(|e| UnitError::ConfigError(e.to_string()))
    }

    /// Load `path` if given, else the default file if it exists, else built-in defaults
    pub fn discover(path: Option<&Path>) -> Result<Self, UnitError> {
        match path {
            Some(p) => Self::load_from_file(p),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load_from_file(default_path)
                } else {
                    debug!("No config file found, using defaults");
                    Ok(Self::empty())
                }
            }
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}
