//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use appcipher_core::CipherError;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (no stored key, no passphrase source)
    NotFound { message: String, hint: String },

    /// Authentication failed (wrong key, tampered envelope)
    AuthFailed {
        message: String,
        hint: Option<String>,
    },

    /// Invalid user input
    InvalidInput(String),

    /// OS keychain failure
    Keychain(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::AuthFailed { message, hint } => {
                if let Some(h) = hint {
                    write!(f, "{}\n{}", message, h)
                } else {
                    write!(f, "{}", message)
                }
            }
            CliError::InvalidInput(message) => write!(f, "{}", message),
            CliError::Keychain(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an AuthFailed error with message and hint.
    pub fn auth_failed_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::AuthFailed {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use super::constants::exit_codes;
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::AuthFailed { .. } => exit_codes::AUTH_FAILED,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::Keychain(_) => exit_codes::KEYCHAIN_FAILED,
        }
    }
}

impl From<CipherError> for CliError {
    fn from(err: CipherError) -> Self {
        match err {
            CipherError::AuthenticationFailure => CliError::auth_failed_with_hint(
                "Authentication failed.",
                "The key does not match, or the envelope was modified.",
            ),
            CipherError::KeyStore(reason) => CliError::Keychain(format!("Keychain error: {}", reason)),
            other => CliError::InvalidInput(other.to_string()),
        }
    }
}

/// Find a typed CLI error in an anyhow chain, converting core errors on the way.
pub fn classify(err: &anyhow::Error) -> Option<CliError> {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return Some(clone_cli_error(cli_err));
        }
        if let Some(cipher_err) = cause.downcast_ref::<CipherError>() {
            return Some(CliError::from(clone_cipher_error(cipher_err)));
        }
    }
    None
}

fn clone_cli_error(err: &CliError) -> CliError {
    match err {
        CliError::NotFound { message, hint } => CliError::not_found(message, hint),
        CliError::AuthFailed { message, hint } => CliError::AuthFailed {
            message: message.clone(),
            hint: hint.clone(),
        },
        CliError::InvalidInput(message) => CliError::invalid_input(message),
        CliError::Keychain(message) => CliError::Keychain(message.clone()),
    }
}

fn clone_cipher_error(err: &CipherError) -> CipherError {
    match err {
        CipherError::InvalidInput(message) => CipherError::InvalidInput(message.clone()),
        CipherError::AuthenticationFailure => CipherError::AuthenticationFailure,
        CipherError::DecryptionFailed => CipherError::DecryptionFailed,
        CipherError::KeyStore(reason) => CipherError::KeyStore(reason.clone()),
        CipherError::Serialization { source } => CipherError::InvalidInput(source.to_string()),
    }
}
