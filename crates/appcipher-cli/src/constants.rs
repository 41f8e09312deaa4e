//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// No key available (nothing stored, no env var, no TTY).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or malformed envelope.
    pub const INVALID_INPUT: i32 = 4;

    /// Authentication failed (wrong key or tampered envelope).
    pub const AUTH_FAILED: i32 = 5;

    /// OS keychain failure.
    pub const KEYCHAIN_FAILED: i32 = 6;
}

/// Environment variable holding the passphrase.
pub const KEY_ENV: &str = "APPCIPHER_KEY";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "APPCIPHER_LOG";
