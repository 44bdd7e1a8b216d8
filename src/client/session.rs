use std::{
    io::Cursor,
    net::{SocketAddr, ToSocketAddrs},
};

use suppaftp::{
    native_tls::TlsConnector, types::FileType, Mode, NativeTlsConnector, NativeTlsFtpStream,
};

use super::{
    config::{DataConnectionMode, SecurityMode, TransportConfig},
    error::Error,
    TransferClient,
};
use crate::settings::FtpSettings;

/// FTP/FTPS implementation of [`TransferClient`].
///
/// Every operation opens its own control connection from a fresh settings
/// read and releases it before returning, on success and failure alike.
#[derive(Debug, Clone, Copy, Default)]
pub struct FtpClient;

impl FtpClient {
    pub fn new() -> Self {
        Self
    }

    fn open(&self, config: &TransportConfig) -> Result<NativeTlsFtpStream, Error> {
        let addr = resolve(&config.host, config.port)?;
        let mut stream = NativeTlsFtpStream::connect_timeout(addr, config.timeout)
            .map_err(|err| Error::Connection(err.to_string()))?;

        stream.get_ref().set_read_timeout(Some(config.timeout))?;
        stream.get_ref().set_write_timeout(Some(config.timeout))?;

        if config.security == SecurityMode::ExplicitTls {
            let connector =
                TlsConnector::new().map_err(|err| Error::Connection(err.to_string()))?;
            stream = stream
                .into_secure(NativeTlsConnector::from(connector), &config.host)
                .map_err(|err| Error::Connection(err.to_string()))?;
        }

        if config.mode == DataConnectionMode::Active {
            stream.set_mode(Mode::Active);
        }

        stream.login(&config.user, &config.password)?;
        stream.transfer_type(FileType::Binary)?;

        if !config.remote_dir.is_empty() {
            stream.cwd(&config.remote_dir)?;
        }

        Ok(stream)
    }

    fn with_session<T>(
        &self,
        settings: &FtpSettings,
        op: impl FnOnce(&mut NativeTlsFtpStream) -> Result<T, Error>,
    ) -> Result<T, Error> {
        let config = TransportConfig::from_settings(settings)?;
        let mut stream = self.open(&config)?;

        let result = op(&mut stream);

        // released whether the operation succeeded or not
        if let Err(err) = stream.quit() {
            debug!("quit after transfer returned: {}", err);
        }

        result
    }
}

fn resolve(host: &str, port: u16) -> Result<SocketAddr, Error> {
    (host, port)
        .to_socket_addrs()?
        .next()
        .ok_or_else(|| Error::Connection(format!("no address for {host}:{port}")))
}

impl TransferClient for FtpClient {
    fn upload(
        &self,
        settings: &FtpSettings,
        remote_name: &str,
        payload: &[u8],
    ) -> Result<(), Error> {
        self.with_session(settings, |stream| {
            let written = stream.put_file(remote_name, &mut Cursor::new(payload))?;
            if written != payload.len() as u64 {
                return Err(Error::Transfer(format!(
                    "short write: {written} of {} bytes",
                    payload.len()
                )));
            }

            Ok(())
        })
    }

    fn list(&self, settings: &FtpSettings) -> Result<Vec<String>, Error> {
        self.with_session(settings, |stream| Ok(stream.nlst(None)?))
    }
}
