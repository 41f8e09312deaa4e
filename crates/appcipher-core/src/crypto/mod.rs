//! Cryptographic building blocks for AppCipher.
//!
//! - **key**: HKDF-SHA256 passphrase expansion
//! - **gcm**: AES-256-GCM seal/open with random nonces
//! - **envelope**: combined and split ciphertext envelopes
//! - **algorithm**: the closed set of supported algorithms
//!
//! ## Security Model
//!
//! - Keys are derived per call and zeroized on drop
//! - Every seal uses a fresh nonce from the OS CSPRNG
//! - Tag verification failures are reported without detail
//!
//! ## Known limitation
//!
//! The HKDF salt is a fixed application constant, so there is no per-user
//! salt diversity. It is kept for compatibility with existing envelopes.

pub mod algorithm;
pub mod envelope;
pub mod gcm;
pub mod key;

pub use algorithm::EncryptionAlgorithm;
pub use envelope::{CombinedEnvelope, SplitEnvelope, MIN_COMBINED_LEN};
pub use gcm::{NONCE_LEN, TAG_LEN};
pub use key::{derive_key, DerivedKey, KEY_LENGTH};
