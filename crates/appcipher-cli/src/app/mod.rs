//! Application-level utilities for the AppCipher CLI.
//!
//! This module provides:
//! - The lazily-configured application context
//! - Passphrase resolution across env, keychain and prompt

mod context;
mod passphrase;

pub use context::AppContext;
