//! Error types for mungectl.
//!
//! Every key operation returns [`Result`]; the CLI turns these into a message
//! on stderr and an exit status.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for munge key operations.
#[derive(Error, Debug)]
pub enum MungeError {
    /// The entropy source could not supply the requested bytes
    #[error("Random source error: {0}")]
    RandomSourceError(String),

    /// No key file exists at the given path
    #[error("Not found: {}", .0.display())]
    NotFoundError(PathBuf),

    /// Filesystem or stream I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Text is not valid standard base64
    #[error("Format error: {0}")]
    FormatError(#[from] base64::DecodeError),

    /// The input source is an interactive terminal, not piped data
    #[error("No munge key provided on stdin")]
    NoInputError,

    /// The key file location could not be resolved
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// A specialized Result type for munge key operations.
pub type Result<T> = std::result::Result<T, MungeError>;
