use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Error;

/// Transport settings snapshot consumed by the provider.
///
/// The authoritative copy lives in the surrounding configuration framework;
/// this crate only reads snapshots and writes back validated updates through
/// a [`SettingsProvider`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FtpSettings {
    pub enabled: bool,
    /// Full endpoint with scheme and trailing slash,
    /// e.g. `ftp://ftp.example.com/` or `ftps://ftp.example.com/folder/`
    pub url: String,
    /// Numeric connection port, kept as text the way the console stores it
    pub port: String,
    pub user: String,
    pub password: String,
    /// Artifact encryption passphrase; empty means no encryption
    pub password_encryption: String,
    pub passive: bool,
    pub ssl: bool,
}

impl Default for FtpSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            url: String::new(),
            port: String::new(),
            user: String::new(),
            password: String::new(),
            password_encryption: String::new(),
            passive: true,
            ssl: false,
        }
    }
}

/// Structured outcome of a configuration update, never an error type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationMessage {
    pub field: &'static str,
    pub message: String,
}

impl FtpSettings {
    /// Checks field values before they are persisted.
    ///
    /// Empty url/port pass here; the transfer client rejects them when an
    /// operation is actually attempted.
    pub fn validate(&self) -> Vec<ValidationMessage> {
        let mut messages = Vec::new();

        if !self.url.is_empty() {
            match Url::parse(&self.url) {
                Ok(url) if matches!(url.scheme(), "ftp" | "ftps") => (),
                Ok(url) => messages.push(ValidationMessage {
                    field: "url",
                    message: format!("unsupported scheme: {}", url.scheme()),
                }),
                Err(err) => messages.push(ValidationMessage {
                    field: "url",
                    message: format!("invalid URL: {err}"),
                }),
            }
        }

        if !self.port.is_empty() && parse_port(&self.port).is_none() {
            messages.push(ValidationMessage {
                field: "port",
                message: format!("invalid port: {}", self.port),
            });
        }

        messages
    }
}

pub(crate) fn parse_port(port: &str) -> Option<u16> {
    port.parse::<u16>().ok().filter(|p| *p > 0)
}

/// Source of the current settings snapshot and sink for validated updates.
pub trait SettingsProvider {
    fn read(&self) -> FtpSettings;
    fn persist(&self, settings: &FtpSettings) -> Result<(), Error>;
}

/// In-process settings store. The production store belongs to the
/// configuration framework and implements the same trait.
#[derive(Debug, Default)]
pub struct MemorySettings {
    inner: Mutex<FtpSettings>,
}

impl MemorySettings {
    pub fn new(settings: FtpSettings) -> Self {
        Self {
            inner: Mutex::new(settings),
        }
    }
}

impl SettingsProvider for MemorySettings {
    fn read(&self) -> FtpSettings {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn persist(&self, settings: &FtpSettings) -> Result<(), Error> {
        *self.inner.lock().unwrap_or_else(|e| e.into_inner()) = settings.clone();
        Ok(())
    }
}
