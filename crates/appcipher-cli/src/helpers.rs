//! Input and parsing helper functions for the CLI.

use std::io::{self, IsTerminal, Read};

use dialoguer::Password;
use secrecy::SecretString;

use crate::constants::KEY_ENV;
use crate::errors::CliError;

/// Read the passphrase from APPCIPHER_KEY, if set and non-blank.
pub fn env_passphrase() -> Option<SecretString> {
    std::env::var(KEY_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(SecretString::from)
}

/// Prompt for passphrase on the terminal.
pub fn prompt_passphrase() -> anyhow::Result<SecretString> {
    Password::new()
        .with_prompt("Key")
        .interact()
        .map(SecretString::from)
        .map_err(|e| anyhow::anyhow!("Failed to read key: {}", e))
}

/// Prompt for a new passphrase with confirmation, or read from APPCIPHER_KEY env var.
pub fn prompt_new_passphrase(interactive: bool) -> anyhow::Result<SecretString> {
    if let Some(value) = env_passphrase() {
        return Ok(value);
    }
    if !interactive {
        return Err(CliError::invalid_input(format!(
            "No key provided and no TTY available. Set {}.",
            KEY_ENV
        ))
        .into());
    }
    Password::new()
        .with_prompt("Enter key")
        .with_confirmation("Confirm key", "Keys do not match")
        .interact()
        .map(SecretString::from)
        .map_err(|e| anyhow::anyhow!("Failed to read key: {}", e))
}

/// Take the positional argument, or read all of stdin when it is piped.
///
/// A single trailing newline is stripped from stdin so `echo text |` works
/// as expected. Other whitespace is preserved.
pub fn read_input(value: Option<String>, what: &str) -> anyhow::Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }

    if io::stdin().is_terminal() {
        return Err(CliError::invalid_input(format!(
            "No {} provided. Pass it as an argument or pipe it via stdin.",
            what
        ))
        .into());
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
    Ok(strip_trailing_newline(buffer))
}

fn strip_trailing_newline(mut value: String) -> String {
    if value.ends_with('\n') {
        value.pop();
        if value.ends_with('\r') {
            value.pop();
        }
    }
    value
}

/// Parse a `KEY=VALUE` argument. The value may itself contain `=`.
pub fn parse_pair(raw: &str) -> Result<(String, String), CliError> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| CliError::invalid_input(format!("Expected KEY=VALUE, got: {}", raw)))?;
    Ok((key.to_string(), value.to_string()))
}
