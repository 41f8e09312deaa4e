//! Secret storage abstraction.
//!
//! The core never talks to a platform keychain directly. It depends on the
//! [`SecretStore`] trait, and callers inject an implementation:
//! - [`MemorySecretStore`]: process-local, for tests and embedding
//! - the CLI provides a keyring-backed store for the OS keychain

pub mod memory;
pub mod traits;

pub use memory::MemorySecretStore;
pub use traits::SecretStore;
