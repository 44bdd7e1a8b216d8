use std::time::Duration;

use url::Url;

use super::error::Error;
use crate::settings::{parse_port, FtpSettings};

/// Fixed per-operation transport timeout.
pub const TRANSFER_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataConnectionMode {
    /// Server opens the data port, client connects to it
    Passive,
    /// Client opens a listening port and instructs the server to connect
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityMode {
    Plaintext,
    /// Encryption negotiated on the plaintext control connection after the
    /// initial handshake
    ExplicitTls,
}

/// Connection parameters derived from a settings snapshot.
///
/// Built fresh for every operation and discarded afterwards; the provider
/// performs at most one backup cycle per invocation, so nothing is pooled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    pub host: String,
    pub port: u16,
    /// Directory portion of the endpoint URL, empty for the server root
    pub remote_dir: String,
    pub user: String,
    pub password: String,
    pub timeout: Duration,
    pub mode: DataConnectionMode,
    pub security: SecurityMode,
}

impl TransportConfig {
    /// Derives the connection parameters without touching the network.
    pub fn from_settings(settings: &FtpSettings) -> Result<Self, Error> {
        if settings.url.is_empty() {
            return Err(Error::Validation("endpoint URL is mandatory".to_owned()));
        }
        if settings.port.is_empty() {
            return Err(Error::Validation("port is mandatory".to_owned()));
        }

        let url = Url::parse(&settings.url)
            .map_err(|err| Error::Validation(format!("invalid endpoint URL: {err}")))?;

        let security = match url.scheme() {
            "ftp" if !settings.ssl => SecurityMode::Plaintext,
            // an ftps endpoint is secured even when the checkbox is off
            "ftp" | "ftps" => SecurityMode::ExplicitTls,
            other => {
                return Err(Error::Validation(format!(
                    "unsupported endpoint scheme: {other}"
                )))
            }
        };

        let host = url
            .host_str()
            .ok_or_else(|| Error::Validation("endpoint URL has no host".to_owned()))?
            .to_owned();

        let port = parse_port(&settings.port)
            .ok_or_else(|| Error::Validation(format!("invalid port: {}", settings.port)))?;

        let mode = if settings.passive {
            DataConnectionMode::Passive
        } else {
            debug!("ftp-backup: passive mode disabled");
            DataConnectionMode::Active
        };

        if security == SecurityMode::ExplicitTls {
            debug!("ftp-backup: tls/ssl enabled");
        }

        let (user, password) = if settings.user.is_empty() {
            ("anonymous".to_owned(), String::new())
        } else {
            (settings.user.clone(), settings.password.clone())
        };

        Ok(Self {
            host,
            port,
            remote_dir: url.path().trim_matches('/').to_owned(),
            user,
            password,
            timeout: TRANSFER_TIMEOUT,
            mode,
            security,
        })
    }
}

#[cfg(test)]
mod test_transport_config {
    use super::*;

    fn settings(url: &str, port: &str) -> FtpSettings {
        FtpSettings {
            url: url.to_owned(),
            port: port.to_owned(),
            ..FtpSettings::default()
        }
    }

    #[test]
    fn test_empty_url_is_rejected_first() {
        let err = TransportConfig::from_settings(&settings("", "21")).unwrap_err();
        assert!(matches!(err, Error::Validation(_)), "got {err:?}");
    }

    #[test]
    fn test_empty_port_is_rejected() {
        let err =
            TransportConfig::from_settings(&settings("ftp://ftp.example.com/", "")).unwrap_err();
        assert!(matches!(err, Error::Validation(_)), "got {err:?}");
    }

    #[test]
    fn test_bad_scheme_is_rejected() {
        let err =
            TransportConfig::from_settings(&settings("http://example.com/", "21")).unwrap_err();
        assert!(matches!(err, Error::Validation(_)), "got {err:?}");
    }

    #[test]
    fn test_non_numeric_port_is_rejected() {
        let err =
            TransportConfig::from_settings(&settings("ftp://ftp.example.com/", "nope")).unwrap_err();
        assert!(matches!(err, Error::Validation(_)), "got {err:?}");
    }

    #[test]
    fn test_passive_default_has_no_override() {
        let config = TransportConfig::from_settings(&settings("ftp://ftp.example.com/", "21"))
            .unwrap();
        assert_eq!(config.mode, DataConnectionMode::Passive);
        assert_eq!(config.security, SecurityMode::Plaintext);
        assert_eq!(config.timeout, TRANSFER_TIMEOUT);
    }

    #[test]
    fn test_active_mode_override() {
        let mut s = settings("ftp://ftp.example.com/", "21");
        s.passive = false;
        let config = TransportConfig::from_settings(&s).unwrap();
        assert_eq!(config.mode, DataConnectionMode::Active);
    }

    #[test]
    fn test_ssl_flag_requests_explicit_tls() {
        let mut s = settings("ftp://ftp.example.com/", "21");
        s.ssl = true;
        let config = TransportConfig::from_settings(&s).unwrap();
        assert_eq!(config.security, SecurityMode::ExplicitTls);
    }

    #[test]
    fn test_ftps_scheme_requests_explicit_tls() {
        let config =
            TransportConfig::from_settings(&settings("ftps://ftp.example.com/", "990")).unwrap();
        assert_eq!(config.security, SecurityMode::ExplicitTls);
    }

    #[test]
    fn test_remote_dir_from_url_path() {
        let config =
            TransportConfig::from_settings(&settings("ftp://ftp.example.com/folder/", "21"))
                .unwrap();
        assert_eq!(config.host, "ftp.example.com");
        assert_eq!(config.remote_dir, "folder");

        let root = TransportConfig::from_settings(&settings("ftp://ftp.example.com/", "21"))
            .unwrap();
        assert_eq!(root.remote_dir, "");
    }

    #[test]
    fn test_anonymous_credentials_when_user_empty() {
        let config = TransportConfig::from_settings(&settings("ftp://ftp.example.com/", "21"))
            .unwrap();
        assert_eq!(config.user, "anonymous");
        assert_eq!(config.password, "");

        let mut s = settings("ftp://ftp.example.com/", "21");
        s.user = "backup".to_owned();
        s.password = "secret".to_owned();
        let config = TransportConfig::from_settings(&s).unwrap();
        assert_eq!(config.user, "backup");
        assert_eq!(config.password, "secret");
    }
}
