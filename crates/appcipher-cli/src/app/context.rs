//! Application context for the AppCipher CLI.
//!
//! Provides a unified context that combines CLI arguments with
//! lazily-loaded configuration.

use std::io::IsTerminal;
use std::path::PathBuf;

use once_cell::unsync::OnceCell;
use secrecy::SecretString;

use appcipher_core::{AppCipher, EncryptionAlgorithm};

use crate::cli::Cli;
use crate::config::{load_config, resolve_config_path, AppCipherConfig};
use crate::helpers::{env_passphrase, prompt_passphrase};
use crate::security::KeyringStore;
use crate::ui::UiContext;

use super::passphrase::{resolve_passphrase, PassphraseSource};

/// Application context that bundles CLI args with configuration.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config_path: OnceCell<PathBuf>,
    config: OnceCell<AppCipherConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config_path: OnceCell::new(),
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Path of the config file (may not exist yet).
    pub fn config_path(&self) -> anyhow::Result<&PathBuf> {
        self.config_path.get_or_try_init(resolve_config_path)
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&AppCipherConfig> {
        self.config
            .get_or_try_init(|| load_config(self.config_path()?))
    }

    /// The `--algorithm` override, else the configured algorithm.
    pub fn algorithm(&self) -> anyhow::Result<EncryptionAlgorithm> {
        if let Some(algorithm) = self.cli.algorithm {
            return Ok(algorithm);
        }
        Ok(self.config()?.cipher.algorithm)
    }

    pub fn keychain_enabled(&self) -> anyhow::Result<bool> {
        Ok(self.config()?.keychain.enabled)
    }

    /// Build a facade over the OS keychain using the configured identity.
    pub fn cipher(&self) -> anyhow::Result<AppCipher<KeyringStore>> {
        let identity = self.config()?.keychain.identity();
        Ok(AppCipher::with_identity(KeyringStore::new(), identity))
    }

    /// UI context for a command's output.
    pub fn ui(&self, json: bool) -> UiContext {
        UiContext::from_env(json, self.cli.no_color)
    }

    /// Resolve the passphrase for encrypt/decrypt.
    pub fn passphrase(
        &self,
        cipher: &AppCipher<KeyringStore>,
        no_input: bool,
    ) -> anyhow::Result<(SecretString, PassphraseSource)> {
        let interactive = !no_input && std::io::stdin().is_terminal();
        resolve_passphrase(
            cipher,
            self.keychain_enabled()?,
            env_passphrase(),
            interactive,
            prompt_passphrase,
        )
    }
}
