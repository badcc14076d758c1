//! # Engine Error Types
//!
//! Errors from loading and saving engine configuration.
//!
//! Generation itself reports [`SkuError`]. Settings handed straight to a
//! generator or allocator are checked on construction and surface as
//! [`SkuError::InvalidConfig`].

use sku_core::SkuError;
use thiserror::Error;

/// Result type alias for engine configuration operations.
pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Invalid engine configuration.
    #[error("Invalid engine configuration: {0}")]
    InvalidConfig(String),

    /// Failed to save config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl From<EngineError> for SkuError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidConfig(reason) => SkuError::InvalidConfig(reason),
            other => SkuError::InvalidConfig(other.to_string()),
        }
    }
}
