#[macro_use]
extern crate log;

pub mod artifact;
mod backup;
/// Transfer client
pub mod client;
pub mod crypto;
mod error;
pub mod fields;
pub mod provider;
pub mod settings;

pub use backup::FtpBackup;
pub use error::Error;
pub use provider::{BackupContext, BackupProvider};
