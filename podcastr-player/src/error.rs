//! Error types for podcastr-player
//!
//! Store operations never fail; errors come from config, catalog and
//! command handling around the store.

use thiserror::Error;

/// Main error type for podcastr-player
#[derive(Error, Debug)]
pub enum Error {
    /// Config, catalog or I/O errors from the common crate
    #[error(transparent)]
    Common(#[from] podcastr_common::Error),

    /// Command text could not be parsed
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Command referenced a catalog position that does not exist
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Convenience Result type using podcastr-player Error
pub type Result<T> = std::result::Result<T, Error>;
