use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    InvalidUnit(String),
    ParseError(String),
    ConfigError(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::InvalidUnit(msg) => write!(f, "Invalid unit: {}", msg),
            ConvertError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConvertError::ConfigError(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for ConvertError {}
