//! Secret store trait definition.
//!
//! The `SecretStore` trait is the only contract the core has with the
//! platform keychain. Keeping it this small lets the crypto logic be tested
//! against an in-memory store without touching a real OS secret service.

use crate::error::Result;

/// Storage for small secrets, addressed by service and account.
///
/// Implementations must ensure:
/// - `put` replaces any existing value for the same identifiers
/// - `get` reports absence as `Ok(None)`, never as an error
/// - `delete` is idempotent; deleting a missing entry succeeds
///
/// Failures of the backend itself are reported as
/// [`CipherError::KeyStore`](crate::error::CipherError::KeyStore).
pub trait SecretStore: Send + Sync {
    /// Store `secret` under (`service`, `account`).
    fn put(&self, service: &str, account: &str, secret: &[u8]) -> Result<()>;

    /// Fetch the secret stored under (`service`, `account`).
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(bytes))` if found, `Ok(None)` if not found.
    fn get(&self, service: &str, account: &str) -> Result<Option<Vec<u8>>>;

    /// Remove the secret stored under (`service`, `account`).
    fn delete(&self, service: &str, account: &str) -> Result<()>;
}

impl<T: SecretStore + ?Sized> SecretStore for &T {
    fn put(&self, service: &str, account: &str, secret: &[u8]) -> Result<()> {
        (**self).put(service, account, secret)
    }

    fn get(&self, service: &str, account: &str) -> Result<Option<Vec<u8>>> {
        (**self).get(service, account)
    }

    fn delete(&self, service: &str, account: &str) -> Result<()> {
        (**self).delete(service, account)
    }
}

impl<T: SecretStore + ?Sized> SecretStore for Box<T> {
    fn put(&self, service: &str, account: &str, secret: &[u8]) -> Result<()> {
        (**self).put(service, account, secret)
    }

    fn get(&self, service: &str, account: &str) -> Result<Option<Vec<u8>>> {
        (**self).get(service, account)
    }

    fn delete(&self, service: &str, account: &str) -> Result<()> {
        (**self).delete(service, account)
    }
}
