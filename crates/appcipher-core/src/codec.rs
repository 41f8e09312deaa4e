//! Text encryption entry points.
//!
//! Each function dispatches on [`EncryptionAlgorithm`] and works on an
//! already-derived key. Use [`crate::AppCipher`] for the passphrase-based
//! surface.

use zeroize::Zeroize;

use crate::crypto::envelope::{CombinedEnvelope, SplitEnvelope};
use crate::crypto::gcm;
use crate::crypto::{DerivedKey, EncryptionAlgorithm};
use crate::error::{CipherError, Result};

/// Encrypt `plaintext` into a base64 combined envelope.
///
/// Output differs on every call, even for identical inputs.
///
/// # Examples
///
/// ```
/// use appcipher_core::codec::{decrypt_combined, encrypt_combined};
/// use appcipher_core::crypto::{derive_key, EncryptionAlgorithm};
///
/// let key = derive_key(b"testKey123");
/// let envelope = encrypt_combined(EncryptionAlgorithm::Aes256Gcm, &key, "Hello, World!").unwrap();
/// let plaintext = decrypt_combined(EncryptionAlgorithm::Aes256Gcm, &key, &envelope).unwrap();
/// assert_eq!(plaintext, "Hello, World!");
/// ```
pub fn encrypt_combined(
    algorithm: EncryptionAlgorithm,
    key: &DerivedKey,
    plaintext: &str,
) -> Result<String> {
    match algorithm {
        EncryptionAlgorithm::Aes256Gcm => {
            let sealed = gcm::seal(key, plaintext.as_bytes())?;
            let envelope = CombinedEnvelope::from(sealed);
            tracing::debug!(
                %algorithm,
                plaintext_len = plaintext.len(),
                "sealed combined envelope"
            );
            Ok(envelope.to_base64())
        }
    }
}

/// Decrypt a base64 combined envelope.
///
/// # Errors
///
/// - [`CipherError::InvalidInput`] for malformed base64 or fewer than 28 decoded bytes
/// - [`CipherError::AuthenticationFailure`] for a wrong key or modified envelope
/// - [`CipherError::DecryptionFailed`] if the plaintext is not UTF-8
pub fn decrypt_combined(
    algorithm: EncryptionAlgorithm,
    key: &DerivedKey,
    envelope: &str,
) -> Result<String> {
    match algorithm {
        EncryptionAlgorithm::Aes256Gcm => {
            let envelope = CombinedEnvelope::from_base64(envelope)?;
            let plaintext = gcm::open(key, envelope.nonce(), envelope.ciphertext_and_tag())?;
            tracing::debug!(%algorithm, "opened combined envelope");
            into_utf8(plaintext)
        }
    }
}

/// Encrypt `plaintext` into separate `ciphertext || tag` and nonce buffers.
pub fn encrypt_split(
    algorithm: EncryptionAlgorithm,
    key: &DerivedKey,
    plaintext: &str,
) -> Result<SplitEnvelope> {
    match algorithm {
        EncryptionAlgorithm::Aes256Gcm => {
            let sealed = gcm::seal(key, plaintext.as_bytes())?;
            tracing::debug!(
                %algorithm,
                plaintext_len = plaintext.len(),
                "sealed split envelope"
            );
            Ok(SplitEnvelope::from(sealed))
        }
    }
}

/// Decrypt a split envelope.
///
/// # Errors
///
/// - [`CipherError::InvalidInput`] unless `iv` is 12 bytes and `combined` at least 16
/// - [`CipherError::AuthenticationFailure`] for a wrong key or modified data
/// - [`CipherError::DecryptionFailed`] if the plaintext is not UTF-8
pub fn decrypt_split(
    algorithm: EncryptionAlgorithm,
    key: &DerivedKey,
    combined: &[u8],
    iv: &[u8],
) -> Result<String> {
    match algorithm {
        EncryptionAlgorithm::Aes256Gcm => {
            let nonce = <[u8; gcm::NONCE_LEN]>::try_from(iv).map_err(|_| {
                CipherError::invalid_input(format!(
                    "IV must be exactly {} bytes (got {})",
                    gcm::NONCE_LEN,
                    iv.len()
                ))
            })?;
            let plaintext = gcm::open(key, &nonce, combined)?;
            tracing::debug!(%algorithm, "opened split envelope");
            into_utf8(plaintext)
        }
    }
}

/// Decrypt a packed `combined || iv` buffer.
pub fn decrypt_packed_split(
    algorithm: EncryptionAlgorithm,
    key: &DerivedKey,
    packed: &[u8],
) -> Result<String> {
    let split = SplitEnvelope::from_packed(packed)?;
    decrypt_split(algorithm, key, &split.combined, &split.iv)
}

fn into_utf8(plaintext: Vec<u8>) -> Result<String> {
    String::from_utf8(plaintext).map_err(|err| {
        err.into_bytes().zeroize();
        CipherError::DecryptionFailed
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::derive_key;

    const ALG: EncryptionAlgorithm = EncryptionAlgorithm::Aes256Gcm;

    #[test]
    fn test_combined_round_trip() {
        let key = derive_key(b"testKey123");
        let envelope = encrypt_combined(ALG, &key, "Hello, World!").unwrap();
        assert_ne!(envelope, "Hello, World!");
        assert_eq!(decrypt_combined(ALG, &key, &envelope).unwrap(), "Hello, World!");
    }

    #[test]
    fn test_split_round_trip() {
        let key = derive_key(b"testKey123");
        let split = encrypt_split(ALG, &key, "Hello, World!").unwrap();
        assert_eq!(split.iv.len(), gcm::NONCE_LEN);
        assert_eq!(split.combined.len(), "Hello, World!".len() + gcm::TAG_LEN);
        let plaintext = decrypt_split(ALG, &key, &split.combined, &split.iv).unwrap();
        assert_eq!(plaintext, "Hello, World!");
    }

    #[test]
    fn test_packed_split_round_trip() {
        let key = derive_key(b"testKey123");
        let split = encrypt_split(ALG, &key, "packed").unwrap();
        let plaintext = decrypt_packed_split(ALG, &key, &split.to_packed()).unwrap();
        assert_eq!(plaintext, "packed");
    }

    #[test]
    fn test_split_rejects_bad_iv_length() {
        let key = derive_key(b"testKey123");
        let split = encrypt_split(ALG, &key, "x").unwrap();
        let result = decrypt_split(ALG, &key, &split.combined, &split.iv[..11]);
        assert!(matches!(result, Err(CipherError::InvalidInput(_))));
    }

    #[test]
    fn test_split_rejects_short_combined() {
        let key = derive_key(b"testKey123");
        let result = decrypt_split(ALG, &key, &[0u8; 15], &[0u8; 12]);
        assert!(matches!(result, Err(CipherError::InvalidInput(_))));
    }

    #[test]
    fn test_non_utf8_plaintext_is_decryption_failed() {
        let key = derive_key(b"testKey123");
        let sealed = gcm::seal(&key, &[0xFF, 0xFE, 0xFD]).unwrap();
        let envelope = CombinedEnvelope::from(sealed).to_base64();
        let result = decrypt_combined(ALG, &key, &envelope);
        assert!(matches!(result, Err(CipherError::DecryptionFailed)));
    }
}
