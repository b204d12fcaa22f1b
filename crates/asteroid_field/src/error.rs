//! Error types for field generation and output

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors produced while configuring, generating or writing a field
#[derive(Error, Debug)]
pub enum FieldError {
    /// Reading or writing a field document failed
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying OS error
        #[source]
        source: std::io::Error,
    },

    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generator parameters are unusable
    #[error("Invalid field configuration: {0}")]
    InvalidConfig(String),

    /// Config file could not be loaded or saved
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl FieldError {
    /// Wrap an IO error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
