//! # AppCipher Core
//!
//! Core library for AppCipher - passphrase-based text encryption with
//! AES-256-GCM and keychain-backed passphrase storage.
//!
//! This crate provides the cryptography and the secret-store abstraction
//! independent of any user interface.
//!
//! ## Architecture
//!
//! - **crypto**: key derivation, AES-256-GCM primitives, envelope formats
//! - **codec**: text encrypt/decrypt entry points dispatched by algorithm
//! - **store**: `SecretStore` trait and an in-memory implementation
//! - **cipher**: the `AppCipher` facade tying passphrases, codec and store together

pub mod cipher;
pub mod codec;
pub mod crypto;
pub mod error;
pub mod store;

pub use cipher::{AppCipher, KeychainIdentity};
pub use crypto::{derive_key, CombinedEnvelope, DerivedKey, EncryptionAlgorithm, SplitEnvelope};
pub use error::{CipherError, Result};
pub use store::{MemorySecretStore, SecretStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
