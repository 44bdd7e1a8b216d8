use crate::error::Error;

/// Artifact encryption transform supplied by the surrounding configuration
/// framework. The provider never interprets the output.
pub trait Encryptor {
    fn encrypt(&self, data: &[u8], passphrase: &str) -> Result<Vec<u8>, Error>;
}

/// Pass-through transform for setups without an encryption backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainEncryptor;

impl Encryptor for PlainEncryptor {
    fn encrypt(&self, data: &[u8], _passphrase: &str) -> Result<Vec<u8>, Error> {
        Ok(data.to_vec())
    }
}
