//! Error types for the crunch engine and combo detector.

use thiserror::Error;

/// Result type alias for the library.
pub type Result<T> = std::result::Result<T, CrunchError>;

/// Main error type for the crunch engine.
#[derive(Error, Debug)]
pub enum CrunchError {
    /// Directory traversal failed before any worker could start.
    #[error("scan error: {0}")]
    Scan(String),

    /// Required configuration is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The user-supplied analysis function (or a worker running it) failed.
    #[error("analysis error: {0}")]
    Analysis(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
