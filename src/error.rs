//! Error types for ScrollLedger

use std::fmt;

#[derive(Debug, Clone)]
pub enum LedgerError {
    InvalidDifficulty(usize),
    TokenNotFound(String),
    ConfigError(String),
    IoError(String),
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LedgerError::InvalidDifficulty(d) => write!(
                f,
                "Invalid difficulty {}: target cannot exceed the {}-character digest",
                d,
                crate::block::DIGEST_HEX_LEN
            ),
            LedgerError::TokenNotFound(id) => write!(f, "Token not found: {}", id),
            LedgerError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            LedgerError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for LedgerError {}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::IoError(err.to_string())
    }
}

impl From<toml::de::Error> for LedgerError {
    fn from(err: toml::de::Error) -> Self {
        LedgerError::ConfigError(err.to_string())
    }
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, LedgerError>;
