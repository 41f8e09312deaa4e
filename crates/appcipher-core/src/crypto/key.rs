//! Key derivation using HKDF-SHA256.
//!
//! A passphrase is expanded into a 256-bit AES key with HKDF over SHA-256,
//! keyed by a constant application salt and an empty info string.
//!
//! # Limitations
//!
//! The salt is fixed for every installation. Two users who choose the same
//! passphrase end up with the same key. Changing the salt would make all
//! previously encrypted envelopes undecryptable, so it stays as is.

use hkdf::Hkdf;
use sha2::Sha256;
use zeroize::ZeroizeOnDrop;

/// Application-wide HKDF salt.
pub const SALT: &[u8] = b"AppCipherSalt";

/// Length of derived key in bytes (32 bytes = 256 bits for AES-256).
pub const KEY_LENGTH: usize = 32;

/// A symmetric key derived from a passphrase.
///
/// Key material is zeroized from memory when dropped.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_LENGTH],
}

impl DerivedKey {
    pub(crate) fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self { key: bytes }
    }

    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for immediate encryption operations.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Derive an AES-256 key from a passphrase.
///
/// Any passphrase is accepted, including the empty one; rejecting weak
/// passphrases is up to the caller.
///
/// # Examples
///
/// ```
/// use appcipher_core::crypto::derive_key;
///
/// let a = derive_key(b"testKey123");
/// let b = derive_key(b"testKey123");
/// assert_eq!(a.as_bytes(), b.as_bytes());
/// ```
pub fn derive_key(passphrase: &[u8]) -> DerivedKey {
    let hkdf = Hkdf::<Sha256>::new(Some(SALT), passphrase);
    let mut key_bytes = [0u8; KEY_LENGTH];
    // 32 bytes is far below the HKDF-SHA256 limit of 255 * 32.
    hkdf.expand(&[], &mut key_bytes)
        .expect("HKDF expand failed (bug)");
    tracing::trace!(key_len = KEY_LENGTH, "derived key from passphrase");
    DerivedKey::from_bytes(key_bytes)
}
