use std::collections::HashMap;

use bytes::Bytes;

use crate::{error::Error, fields::Field, settings::ValidationMessage};

/// System state handed to a backup run.
///
/// An explicit value instead of a process-wide configuration singleton, so
/// runs are deterministic and testable.
#[derive(Debug, Clone)]
pub struct BackupContext {
    pub hostname: String,
    pub domain: String,
    /// Serialized configuration to back up
    pub config_xml: Bytes,
    /// Whether the global configuration passed its own consistency checks
    pub valid: bool,
}

/// Capability shared by every backup provider in the subsystem.
pub trait BackupProvider {
    /// Human-readable provider label.
    fn name(&self) -> &'static str;

    /// Whether this provider takes part in a backup run.
    fn is_enabled(&self) -> bool;

    /// Management-console descriptors with current values.
    fn configuration_fields(&self) -> Vec<Field>;

    /// Validates a configuration update and persists it when the returned
    /// message list is empty.
    fn set_configuration(
        &self,
        conf: &HashMap<String, String>,
    ) -> Result<Vec<ValidationMessage>, Error>;

    /// Runs one backup cycle.
    ///
    /// `Ok(None)` means the run was skipped (invalid global configuration,
    /// provider disabled) or a transport failure was suppressed after
    /// logging. `Ok(Some(names))` carries the remote backups found after the
    /// upload.
    fn backup(&self, ctx: &BackupContext) -> Result<Option<Vec<String>>, Error>;
}
