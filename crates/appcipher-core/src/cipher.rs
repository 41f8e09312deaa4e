//! Passphrase-based encryption facade.
//!
//! [`AppCipher`] bundles the codec with a [`SecretStore`] so a presentation
//! layer can encrypt with a passphrase and keep that passphrase in the
//! platform keychain. It holds no key material: every call derives the key
//! from the passphrase it is given and drops it before returning.

use zeroize::Zeroizing;

use crate::codec;
use crate::crypto::{derive_key, EncryptionAlgorithm, SplitEnvelope};
use crate::error::{CipherError, Result};
use crate::store::SecretStore;

/// Default keychain service identifier.
pub const DEFAULT_SERVICE: &str = "com.appcipher.keychain";

/// Default keychain account identifier.
pub const DEFAULT_ACCOUNT: &str = "appcipherkey";

/// Where the passphrase lives in a [`SecretStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeychainIdentity {
    pub service: String,
    pub account: String,
}

impl KeychainIdentity {
    pub fn new(service: impl Into<String>, account: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            account: account.into(),
        }
    }
}

impl Default for KeychainIdentity {
    fn default() -> Self {
        Self::new(DEFAULT_SERVICE, DEFAULT_ACCOUNT)
    }
}

/// Stateless encryption facade over a secret store.
///
/// # Examples
///
/// ```
/// use appcipher_core::{AppCipher, EncryptionAlgorithm, MemorySecretStore};
///
/// let cipher = AppCipher::new(MemorySecretStore::new());
/// let encrypted = cipher
///     .encrypt(EncryptionAlgorithm::Aes256Gcm, "testKey123", "Hello, World!")
///     .unwrap();
/// let decrypted = cipher
///     .decrypt(EncryptionAlgorithm::Aes256Gcm, "testKey123", &encrypted)
///     .unwrap();
/// assert_eq!(decrypted, "Hello, World!");
/// ```
#[derive(Debug)]
pub struct AppCipher<S> {
    store: S,
    identity: KeychainIdentity,
}

impl<S: SecretStore> AppCipher<S> {
    /// Create a facade using the default keychain identity.
    pub fn new(store: S) -> Self {
        Self::with_identity(store, KeychainIdentity::default())
    }

    pub fn with_identity(store: S, identity: KeychainIdentity) -> Self {
        Self { store, identity }
    }

    pub fn identity(&self) -> &KeychainIdentity {
        &self.identity
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Encrypt `input` to a base64 combined envelope.
    pub fn encrypt(
        &self,
        algorithm: EncryptionAlgorithm,
        passphrase: &str,
        input: &str,
    ) -> Result<String> {
        let key = derive_key(passphrase.as_bytes());
        codec::encrypt_combined(algorithm, &key, input)
    }

    /// Decrypt a base64 combined envelope.
    pub fn decrypt(
        &self,
        algorithm: EncryptionAlgorithm,
        passphrase: &str,
        encrypted_base64: &str,
    ) -> Result<String> {
        let key = derive_key(passphrase.as_bytes());
        codec::decrypt_combined(algorithm, &key, encrypted_base64)
    }

    /// Encrypt `input` to separate ciphertext and iv buffers.
    pub fn encrypt_split(
        &self,
        algorithm: EncryptionAlgorithm,
        passphrase: &str,
        input: &str,
    ) -> Result<SplitEnvelope> {
        let key = derive_key(passphrase.as_bytes());
        codec::encrypt_split(algorithm, &key, input)
    }

    /// Decrypt separate ciphertext and iv buffers.
    pub fn decrypt_split(
        &self,
        algorithm: EncryptionAlgorithm,
        passphrase: &str,
        combined: &[u8],
        iv: &[u8],
    ) -> Result<String> {
        let key = derive_key(passphrase.as_bytes());
        codec::decrypt_split(algorithm, &key, combined, iv)
    }

    /// Decrypt a packed `combined || iv` buffer.
    pub fn decrypt_packed_split(
        &self,
        algorithm: EncryptionAlgorithm,
        passphrase: &str,
        packed: &[u8],
    ) -> Result<String> {
        let key = derive_key(passphrase.as_bytes());
        codec::decrypt_packed_split(algorithm, &key, packed)
    }

    /// Encrypt a string map as compact JSON.
    ///
    /// Keys are trimmed and blank keys are dropped. Later duplicates win.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidInput`] if no usable pair remains.
    pub fn encrypt_map<I, K, V>(
        &self,
        algorithm: EncryptionAlgorithm,
        passphrase: &str,
        pairs: I,
    ) -> Result<(serde_json::Map<String, serde_json::Value>, String)>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut map = serde_json::Map::new();
        for (key, value) in pairs {
            let key = key.as_ref().trim();
            if key.is_empty() {
                continue;
            }
            map.insert(key.to_string(), serde_json::Value::String(value.into()));
        }
        if map.is_empty() {
            return Err(CipherError::invalid_input(
                "No valid key-value pairs to encrypt",
            ));
        }

        let json = Zeroizing::new(serde_json::to_string(&map)?);
        let encrypted = self.encrypt(algorithm, passphrase, &json)?;
        Ok((map, encrypted))
    }

    /// Store the passphrase, replacing any existing one.
    pub fn store_key(&self, passphrase: &str) -> Result<()> {
        let KeychainIdentity { service, account } = &self.identity;
        self.store.delete(service, account)?;
        self.store.put(service, account, passphrase.as_bytes())?;
        tracing::info!(service = %service, account = %account, "stored key in secret store");
        Ok(())
    }

    /// Fetch the stored passphrase, if any.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::KeyStore`] if the store fails or the stored
    /// bytes are not UTF-8.
    pub fn retrieve_key(&self) -> Result<Option<String>> {
        let KeychainIdentity { service, account } = &self.identity;
        let Some(bytes) = self.store.get(service, account)? else {
            tracing::debug!(service = %service, account = %account, "no key in secret store");
            return Ok(None);
        };
        let passphrase = String::from_utf8(bytes).map_err(|err| {
            zeroize::Zeroize::zeroize(&mut err.into_bytes());
            CipherError::key_store("Stored key is not valid UTF-8")
        })?;
        Ok(Some(passphrase))
    }

    /// Whether a passphrase is currently stored.
    pub fn has_key(&self) -> Result<bool> {
        Ok(self.retrieve_key()?.is_some())
    }

    /// Delete the stored passphrase. Succeeds if none was stored.
    pub fn remove_key(&self) -> Result<()> {
        let KeychainIdentity { service, account } = &self.identity;
        self.store.delete(service, account)?;
        tracing::info!(service = %service, account = %account, "removed key from secret store");
        Ok(())
    }
}
