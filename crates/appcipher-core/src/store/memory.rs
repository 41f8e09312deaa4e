//! In-memory secret store.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use zeroize::Zeroizing;

use super::traits::SecretStore;
use crate::error::{CipherError, Result};

type Entries = HashMap<(String, String), Zeroizing<Vec<u8>>>;

/// A process-local [`SecretStore`] backed by a `HashMap`.
///
/// Values are zeroized when replaced, deleted, or when the store is dropped.
/// Nothing survives the process, so this is meant for tests and for callers
/// that manage persistence themselves.
#[derive(Default)]
pub struct MemorySecretStore {
    entries: Mutex<Entries>,
}

impl MemorySecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored secrets.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::KeyStore`] if the lock is poisoned.
    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Entries>> {
        self.entries
            .lock()
            .map_err(|_| CipherError::key_store("In-memory store lock poisoned"))
    }
}

impl std::fmt::Debug for MemorySecretStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("MemorySecretStore");
        match self.len() {
            Ok(count) => debug.field("entries", &count),
            Err(_) => debug.field("entries", &"<poisoned>"),
        };
        debug.finish()
    }
}

impl SecretStore for MemorySecretStore {
    fn put(&self, service: &str, account: &str, secret: &[u8]) -> Result<()> {
        self.lock()?.insert(
            (service.to_string(), account.to_string()),
            Zeroizing::new(secret.to_vec()),
        );
        Ok(())
    }

    fn get(&self, service: &str, account: &str) -> Result<Option<Vec<u8>>> {
        let entries = self.lock()?;
        Ok(entries
            .get(&(service.to_string(), account.to_string()))
            .map(|secret| secret.to_vec()))
    }

    fn delete(&self, service: &str, account: &str) -> Result<()> {
        self.lock()?
            .remove(&(service.to_string(), account.to_string()));
        Ok(())
    }
}
