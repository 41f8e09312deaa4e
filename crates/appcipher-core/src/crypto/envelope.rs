//! Ciphertext envelope formats.
//!
//! # Combined
//!
//! ```text
//! base64( nonce(12) || ciphertext(n) || tag(16) )
//! ```
//!
//! The canonical wire format. Must stay stable across versions so that
//! previously encrypted text keeps decrypting.
//!
//! # Split
//!
//! ```text
//! combined = ciphertext(n) || tag(16)
//! iv       = nonce(12)
//! ```
//!
//! Used when the nonce travels separately. Callers that need a single buffer
//! can pack it as `combined || iv`; unpacking takes the iv from the last 12
//! bytes and the tag from the 16 bytes before that.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::gcm::{Sealed, NONCE_LEN, TAG_LEN};
use crate::error::{CipherError, Result};

/// Smallest valid combined envelope: nonce plus an empty ciphertext's tag.
pub const MIN_COMBINED_LEN: usize = NONCE_LEN + TAG_LEN;

/// Nonce, ciphertext and tag held together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedEnvelope {
    nonce: [u8; NONCE_LEN],
    ciphertext_and_tag: Vec<u8>,
}

impl CombinedEnvelope {
    /// Parse raw `nonce || ciphertext || tag` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidInput`] if fewer than
    /// [`MIN_COMBINED_LEN`] bytes are supplied.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < MIN_COMBINED_LEN {
            return Err(CipherError::invalid_input(format!(
                "Envelope must be at least {} bytes (got {})",
                MIN_COMBINED_LEN,
                bytes.len()
            )));
        }
        let (nonce_bytes, rest) = bytes.split_at(NONCE_LEN);
        let mut nonce = [0u8; NONCE_LEN];
        nonce.copy_from_slice(nonce_bytes);
        Ok(Self {
            nonce,
            ciphertext_and_tag: rest.to_vec(),
        })
    }

    /// Decode a base64 envelope string.
    pub fn from_base64(encoded: &str) -> Result<Self> {
        let bytes = STANDARD
            .decode(encoded.trim())
            .map_err(|e| CipherError::invalid_input(format!("Malformed base64: {}", e)))?;
        Self::from_bytes(&bytes)
    }

    /// Serialize to `nonce || ciphertext || tag`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(NONCE_LEN + self.ciphertext_and_tag.len());
        out.extend_from_slice(&self.nonce);
        out.extend_from_slice(&self.ciphertext_and_tag);
        out
    }

    /// Encode to the base64 wire format.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }

    pub fn nonce(&self) -> &[u8; NONCE_LEN] {
        &self.nonce
    }

    pub fn ciphertext_and_tag(&self) -> &[u8] {
        &self.ciphertext_and_tag
    }

    /// Re-express this envelope in split form.
    pub fn into_split(self) -> SplitEnvelope {
        SplitEnvelope {
            combined: self.ciphertext_and_tag,
            iv: self.nonce.to_vec(),
        }
    }
}

impl From<Sealed> for CombinedEnvelope {
    fn from(sealed: Sealed) -> Self {
        Self {
            nonce: sealed.nonce,
            ciphertext_and_tag: sealed.ciphertext_and_tag,
        }
    }
}

/// Ciphertext-with-tag and nonce as two separate buffers.
///
/// Fields are unchecked; lengths are validated when the envelope is opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitEnvelope {
    /// `ciphertext || tag(16)`
    pub combined: Vec<u8>,
    /// The 12 raw nonce bytes.
    pub iv: Vec<u8>,
}

impl SplitEnvelope {
    pub fn new(combined: Vec<u8>, iv: Vec<u8>) -> Self {
        Self { combined, iv }
    }

    /// The iv as a fixed-size nonce.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidInput`] unless the iv is exactly
    /// [`NONCE_LEN`] bytes.
    pub fn nonce(&self) -> Result<[u8; NONCE_LEN]> {
        <[u8; NONCE_LEN]>::try_from(self.iv.as_slice()).map_err(|_| {
            CipherError::invalid_input(format!(
                "IV must be exactly {} bytes (got {})",
                NONCE_LEN,
                self.iv.len()
            ))
        })
    }

    /// Pack into a single `combined || iv` buffer.
    pub fn to_packed(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.combined.len() + self.iv.len());
        out.extend_from_slice(&self.combined);
        out.extend_from_slice(&self.iv);
        out
    }

    /// Unpack a `combined || iv` buffer.
    pub fn from_packed(packed: &[u8]) -> Result<Self> {
        if packed.len() < MIN_COMBINED_LEN {
            return Err(CipherError::invalid_input(format!(
                "Packed envelope must be at least {} bytes (got {})",
                MIN_COMBINED_LEN,
                packed.len()
            )));
        }
        let (combined, iv) = packed.split_at(packed.len() - NONCE_LEN);
        Ok(Self {
            combined: combined.to_vec(),
            iv: iv.to_vec(),
        })
    }

    pub fn to_packed_base64(&self) -> String {
        STANDARD.encode(self.to_packed())
    }

    pub fn from_packed_base64(encoded: &str) -> Result<Self> {
        let bytes = STANDARD
            .decode(encoded.trim())
            .map_err(|e| CipherError::invalid_input(format!("Malformed base64: {}", e)))?;
        Self::from_packed(&bytes)
    }

    /// Re-express this envelope in combined form.
    pub fn into_combined(self) -> Result<CombinedEnvelope> {
        let nonce = self.nonce()?;
        if self.combined.len() < TAG_LEN {
            return Err(CipherError::invalid_input(format!(
                "Ciphertext must be at least {} bytes (got {})",
                TAG_LEN,
                self.combined.len()
            )));
        }
        Ok(CombinedEnvelope {
            nonce,
            ciphertext_and_tag: self.combined,
        })
    }
}

impl From<Sealed> for SplitEnvelope {
    fn from(sealed: Sealed) -> Self {
        Self {
            combined: sealed.ciphertext_and_tag,
            iv: sealed.nonce.to_vec(),
        }
    }
}
