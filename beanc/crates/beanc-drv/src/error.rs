//! Error types for the beanc driver.
//!
//! Lexing itself never fails; everything here comes from the world around
//! it: configuration, the filesystem, and output serialization.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// Configuration could not be found, parsed or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A source file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
