use anyhow::Result;
use bytes::Bytes;
use ftp_backup::{
    client::FtpClient,
    crypto::PlainEncryptor,
    settings::{FtpSettings, MemorySettings},
    BackupContext, BackupProvider, FtpBackup,
};

fn main() -> Result<()> {
    env_logger::init();

    let settings = FtpSettings {
        enabled: true,
        url: "ftp://ftp.example.com/backups/".to_owned(),
        port: "21".to_owned(),
        user: "backup".to_owned(),
        password: "secret".to_owned(),
        ..FtpSettings::default()
    };

    let provider = FtpBackup::new(
        MemorySettings::new(settings),
        FtpClient::new(),
        PlainEncryptor,
    );

    let ctx = BackupContext {
        hostname: "fw".to_owned(),
        domain: "lan".to_owned(),
        config_xml: Bytes::from_static(b"<config/>"),
        valid: true,
    };

    match provider.backup(&ctx)? {
        Some(backups) => println!("remote backups: {:?}", backups),
        None => println!("backup skipped or failed, see log"),
    }

    Ok(())
}
