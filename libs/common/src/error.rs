//! Common error types for byteconv tools

use thiserror::Error;

/// Common error type used across byteconv tools
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Logging setup errors
    #[error("Logging error: {0}")]
    Logging(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    pub fn logging(msg: impl Into<String>) -> Self {
        Error::Logging(msg.into())
    }
}

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;
