//! Error types for AppCipher core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these to
//! user-facing messages and exit codes.
//!
//! Authentication failures deliberately carry no detail. Whether the key was
//! wrong, the tag was altered, or the ciphertext was truncated after parsing,
//! the caller sees the same variant and the same message.

use thiserror::Error;

/// Result type alias for AppCipher operations.
pub type Result<T> = std::result::Result<T, CipherError>;

/// Core error type for AppCipher operations.
#[derive(Debug, Error)]
pub enum CipherError {
    /// Malformed base64, or a buffer shorter than the envelope minimum
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// AEAD tag verification failed
    #[error("Authentication failed")]
    AuthenticationFailure,

    /// Authenticated plaintext is not valid UTF-8
    #[error("Decryption failed: plaintext is not valid UTF-8")]
    DecryptionFailed,

    /// Secret store backend failure
    #[error("Key store error: {0}")]
    KeyStore(String),

    /// JSON serialization error
    #[error("JSON error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl CipherError {
    /// Shorthand for building an [`CipherError::InvalidInput`].
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CipherError::InvalidInput(message.into())
    }

    /// Shorthand for building a [`CipherError::KeyStore`].
    pub fn key_store(reason: impl Into<String>) -> Self {
        CipherError::KeyStore(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authentication_failure_message_is_opaque() {
        let message = CipherError::AuthenticationFailure.to_string();
        assert_eq!(message, "Authentication failed");
        assert!(!message.contains("tag"));
        assert!(!message.contains("nonce"));
    }

    #[test]
    fn test_invalid_input_carries_reason() {
        let err = CipherError::invalid_input("envelope too short");
        assert_eq!(err.to_string(), "Invalid input: envelope too short");
    }

    #[test]
    fn test_key_store_carries_reason() {
        let err = CipherError::key_store("locked");
        assert_eq!(err.to_string(), "Key store error: locked");
    }
}
