use std::io;

use suppaftp::FtpError;
use thiserror::Error;

/// Enum for transfer client errors
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A mandatory transport field is missing or malformed
    #[error("{0}")]
    Validation(String),
    /// The transport could not be initialized
    #[error("connection: {0}")]
    Connection(String),
    /// The remote operation did not complete cleanly; carries the
    /// transport-reported diagnostic
    #[error("transfer: {0}")]
    Transfer(String),
}

impl From<FtpError> for Error {
    fn from(err: FtpError) -> Self {
        Self::Transfer(err.to_string())
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Connection(err.to_string())
    }
}
