//! Error types for the layered configuration system.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Empty key path")]
    EmptyKeyPath,

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Configuration I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
