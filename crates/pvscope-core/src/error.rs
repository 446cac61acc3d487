//! Error types for PVScope

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PvError {
    // Geometry errors
    #[error("Invalid geometry: {reason}")]
    InvalidGeometry { reason: String },

    // Input errors
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    // Configuration errors
    #[error("Missing required configuration: {key}")]
    ConfigMissing { key: String },

    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PvError {
    pub fn invalid_geometry(reason: impl Into<String>) -> Self {
        PvError::InvalidGeometry { reason: reason.into() }
    }

    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        PvError::InvalidInput { field: field.into(), reason: reason.into() }
    }
}

impl From<serde_json::Error> for PvError {
    fn from(err: serde_json::Error) -> Self {
        PvError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PvError>;
