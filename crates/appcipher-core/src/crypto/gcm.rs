//! AES-256-GCM seal/open primitives.
//!
//! This module knows nothing about envelopes or base64. It turns a derived
//! key and plaintext into a fresh nonce plus `ciphertext || tag`, and back.
//!
//! A new random nonce is drawn from the OS CSPRNG on every [`seal`] call.
//! GCM nonce reuse under the same key breaks both confidentiality and
//! authenticity, so callers never get to choose the nonce.

use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Key, Nonce};

use super::key::DerivedKey;
use crate::error::{CipherError, Result};

/// Byte length of an AES-GCM nonce (96 bits).
pub const NONCE_LEN: usize = 12;

/// Byte length of an AES-GCM authentication tag (128 bits).
pub const TAG_LEN: usize = 16;

/// Output of a single seal operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sealed {
    /// The nonce used for this message.
    pub nonce: [u8; NONCE_LEN],
    /// Ciphertext with the 16-byte tag appended.
    pub ciphertext_and_tag: Vec<u8>,
}

/// Encrypt `plaintext` under `key` with a freshly generated nonce.
///
/// # Errors
///
/// Returns [`CipherError::InvalidInput`] only if the plaintext exceeds the
/// GCM message size limit (about 64 GiB).
pub fn seal(key: &DerivedKey, plaintext: &[u8]) -> Result<Sealed> {
    let cipher = build_cipher(key);
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let ciphertext_and_tag = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|_| CipherError::invalid_input("Plaintext too large for AES-GCM"))?;

    let mut nonce_bytes = [0u8; NONCE_LEN];
    nonce_bytes.copy_from_slice(nonce.as_slice());

    Ok(Sealed {
        nonce: nonce_bytes,
        ciphertext_and_tag,
    })
}

/// Decrypt and authenticate `ciphertext_and_tag` under `key` and `nonce`.
///
/// # Errors
///
/// - [`CipherError::InvalidInput`] if the buffer cannot hold a tag
/// - [`CipherError::AuthenticationFailure`] if the tag does not verify
pub fn open(key: &DerivedKey, nonce: &[u8; NONCE_LEN], ciphertext_and_tag: &[u8]) -> Result<Vec<u8>> {
    if ciphertext_and_tag.len() < TAG_LEN {
        return Err(CipherError::invalid_input(format!(
            "Ciphertext must be at least {} bytes (got {})",
            TAG_LEN,
            ciphertext_and_tag.len()
        )));
    }

    let cipher = build_cipher(key);
    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext_and_tag)
        .map_err(|_| CipherError::AuthenticationFailure)
}

fn build_cipher(key: &DerivedKey) -> Aes256Gcm {
    Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()))
}
