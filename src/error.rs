use thiserror::Error;

use crate::client;

/// Enum for provider errors
#[derive(Debug, Error)]
pub enum Error {
    /// Any errors raised by the transfer client
    #[error(transparent)]
    Client(#[from] client::Error),
    /// Surfaced opaquely from the external encryption transform
    #[error("encryption: {0}")]
    Encryption(String),
    /// The settings store refused a validated update
    #[error("settings: {0}")]
    Settings(String),
}
