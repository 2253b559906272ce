use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum UnitError {
    UnknownUnit(String),
    InvalidFactor(f64),
    ConfigError(String),
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitError::UnknownUnit(name) => write!(f, "Unknown unit: {}", name),
            UnitError::InvalidFactor(factor) => {
                write!(f, "Invalid conversion factor: {}", factor)
            }
            UnitError::ConfigError(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for UnitError {}
