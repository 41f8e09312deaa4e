//! OS keychain access.

use appcipher_core::{CipherError, Result, SecretStore};

/// [`SecretStore`] backed by the platform keychain.
///
/// Values go through the keyring password API, so only UTF-8 secrets
/// can be stored.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyringStore;

impl KeyringStore {
    pub fn new() -> Self {
        Self
    }
}

impl SecretStore for KeyringStore {
    fn put(&self, service: &str, account: &str, secret: &[u8]) -> Result<()> {
        let value = std::str::from_utf8(secret)
            .map_err(|_| CipherError::key_store("Keychain values must be valid UTF-8"))?;
        keychain_entry(service, account)?
            .set_password(value)
            .map_err(|e| CipherError::key_store(format!("Keychain write failed: {}", e)))
    }

    fn get(&self, service: &str, account: &str) -> Result<Option<Vec<u8>>> {
        match keychain_entry(service, account)?.get_password() {
            Ok(value) => Ok(Some(value.into_bytes())),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(err) => Err(CipherError::key_store(format!(
                "Keychain read failed: {}",
                err
            ))),
        }
    }

    fn delete(&self, service: &str, account: &str) -> Result<()> {
        match keychain_entry(service, account)?.delete_password() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Ok(()),
            Err(err) => Err(CipherError::key_store(format!(
                "Keychain delete failed: {}",
                err
            ))),
        }
    }
}

fn keychain_entry(service: &str, account: &str) -> Result<keyring::Entry> {
    keyring::Entry::new(service, account)
        .map_err(|e| CipherError::key_store(format!("Keychain entry failed: {}", e)))
}
