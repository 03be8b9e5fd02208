//! Common error types for podcastr

use thiserror::Error;

/// Common result type for podcastr operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across podcastr crates
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Episode catalog could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config file could not be decoded
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
