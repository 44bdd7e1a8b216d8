use std::collections::HashMap;

use chrono::Local;

use crate::{
    artifact,
    client::TransferClient,
    crypto::Encryptor,
    error::Error,
    fields::{self, Field},
    provider::{BackupContext, BackupProvider},
    settings::{SettingsProvider, ValidationMessage},
};

/// FTP backup provider: uploads the configuration artifact and reports the
/// matching remote backups.
///
/// Collaborators are injected so the orchestration can be exercised without
/// a live endpoint or the surrounding configuration framework.
pub struct FtpBackup<S, C, E> {
    store: S,
    client: C,
    encryptor: E,
}

impl<S, C, E> FtpBackup<S, C, E>
where
    S: SettingsProvider,
    C: TransferClient,
    E: Encryptor,
{
    pub fn new(store: S, client: C, encryptor: E) -> Self {
        Self {
            store,
            client,
            encryptor,
        }
    }
}

impl<S, C, E> BackupProvider for FtpBackup<S, C, E>
where
    S: SettingsProvider,
    C: TransferClient,
    E: Encryptor,
{
    fn name(&self) -> &'static str {
        "FTP"
    }

    fn is_enabled(&self) -> bool {
        self.store.read().enabled
    }

    fn configuration_fields(&self) -> Vec<Field> {
        fields::configuration_fields(&self.store.read())
    }

    fn set_configuration(
        &self,
        conf: &HashMap<String, String>,
    ) -> Result<Vec<ValidationMessage>, Error> {
        let mut settings = self.store.read();
        fields::apply_field_values(&mut settings, conf);

        let messages = settings.validate();
        if messages.is_empty() {
            self.store.persist(&settings)?;
        }

        Ok(messages)
    }

    fn backup(&self, ctx: &BackupContext) -> Result<Option<Vec<String>>, Error> {
        let settings = self.store.read();
        if !ctx.valid || !settings.enabled {
            return Ok(None);
        }

        let name = artifact::artifact_name(&ctx.hostname, &ctx.domain, Local::now());

        let mut payload = ctx.config_xml.to_vec();
        if !settings.password_encryption.is_empty() {
            payload = self
                .encryptor
                .encrypt(&payload, &settings.password_encryption)?;
        }

        debug!("starting backup via ftp");

        let result = self
            .client
            .upload(&settings, &name, &payload)
            .and_then(|()| self.client.list(&settings));

        // the single point where transport failures are suppressed; the
        // subsystem only ever sees the log entry
        match result {
            Ok(names) => Ok(Some(artifact::filter_backups(names))),
            Err(err) => {
                error!("{}", err);
                Ok(None)
            }
        }
    }
}
