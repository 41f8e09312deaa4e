use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use appcipher_core::cipher::{DEFAULT_ACCOUNT, DEFAULT_SERVICE};
use appcipher_core::{EncryptionAlgorithm, KeychainIdentity};

#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppCipherConfig {
    #[serde(default)]
    pub cipher: CipherSection,
    #[serde(default)]
    pub keychain: KeychainSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CipherSection {
    #[serde(default)]
    pub algorithm: EncryptionAlgorithm,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeychainSection {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_service")]
    pub service: String,
    #[serde(default = "default_account")]
    pub account: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingSection {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for KeychainSection {
    fn default() -> Self {
        Self {
            enabled: true,
            service: default_service(),
            account: default_account(),
        }
    }
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl KeychainSection {
    pub fn identity(&self) -> KeychainIdentity {
        KeychainIdentity::new(&self.service, &self.account)
    }
}

fn default_true() -> bool {
    true
}

fn default_service() -> String {
    DEFAULT_SERVICE.to_string()
}

fn default_account() -> String {
    DEFAULT_ACCOUNT.to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Resolve the config file path, checking APPCIPHER_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("APPCIPHER_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

/// Load the config file, falling back to defaults when it does not exist.
pub fn load_config(path: &Path) -> anyhow::Result<AppCipherConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(AppCipherConfig::default());
    }
    read_config(path)
}

pub fn read_config(path: &Path) -> anyhow::Result<AppCipherConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &AppCipherConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("appcipher"));
        }
    }
    Ok(home_dir()?.join(".config").join("appcipher"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
