//! Supported encryption algorithms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CipherError;

/// Encryption algorithm selector.
///
/// Every public encrypt/decrypt entry point matches on this enum, so adding a
/// variant forces each of them to grow a dedicated implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncryptionAlgorithm {
    /// AES-256 in Galois/Counter Mode, 96-bit nonce, 128-bit tag
    #[default]
    #[serde(rename = "aes256_gcm", alias = "aes256", alias = "aes-256-gcm")]
    Aes256Gcm,
}

impl EncryptionAlgorithm {
    /// All supported algorithms, in display order.
    pub const ALL: &'static [EncryptionAlgorithm] = &[EncryptionAlgorithm::Aes256Gcm];

    /// Canonical identifier, as written in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            EncryptionAlgorithm::Aes256Gcm => "aes256_gcm",
        }
    }
}

impl fmt::Display for EncryptionAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EncryptionAlgorithm {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aes256_gcm" | "aes256" | "aes-256-gcm" => Ok(EncryptionAlgorithm::Aes256Gcm),
            other => Err(CipherError::invalid_input(format!(
                "Unsupported algorithm: {}",
                other
            ))),
        }
    }
}
