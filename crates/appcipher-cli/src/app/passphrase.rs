//! Passphrase resolution.

use secrecy::SecretString;

use appcipher_core::{AppCipher, SecretStore};

use crate::constants::KEY_ENV;
use crate::errors::CliError;

/// Where a resolved passphrase came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassphraseSource {
    Env,
    Keychain,
    Prompt,
}

impl PassphraseSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Env => "env",
            Self::Keychain => "keychain",
            Self::Prompt => "prompt",
        }
    }
}

/// Find the passphrase for an encrypt/decrypt operation.
///
/// Order: `env_value` (APPCIPHER_KEY), then the stored key when the keychain
/// is enabled, then `prompt` when interactive. A keychain read failure is
/// logged and treated as "no stored key".
pub fn resolve_passphrase<S, F>(
    cipher: &AppCipher<S>,
    keychain_enabled: bool,
    env_value: Option<SecretString>,
    interactive: bool,
    prompt: F,
) -> anyhow::Result<(SecretString, PassphraseSource)>
where
    S: SecretStore,
    F: FnOnce() -> anyhow::Result<SecretString>,
{
    if let Some(value) = env_value {
        tracing::debug!(source = "env", "resolved key");
        return Ok((value, PassphraseSource::Env));
    }

    if keychain_enabled {
        match cipher.retrieve_key() {
            Ok(Some(value)) => {
                tracing::debug!(source = "keychain", "resolved key");
                return Ok((SecretString::from(value), PassphraseSource::Keychain));
            }
            Ok(None) => {}
            Err(err) => tracing::warn!(error = %err, "keychain lookup failed"),
        }
    }

    if interactive {
        let value = prompt()?;
        tracing::debug!(source = "prompt", "resolved key");
        return Ok((value, PassphraseSource::Prompt));
    }

    let hint = if keychain_enabled {
        format!("Set {} or run: appcipher key set", KEY_ENV)
    } else {
        format!("Set {}", KEY_ENV)
    };
    Err(CliError::not_found("No key available and no TTY to prompt on.", hint).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use appcipher_core::{CipherError, MemorySecretStore, Result};
    use secrecy::ExposeSecret;

    use crate::constants::exit_codes;
    use crate::errors::classify;

    struct LockedStore;

    impl SecretStore for LockedStore {
        fn put(&self, _: &str, _: &str, _: &[u8]) -> Result<()> {
            Err(CipherError::key_store("locked"))
        }

        fn get(&self, _: &str, _: &str) -> Result<Option<Vec<u8>>> {
            Err(CipherError::key_store("locked"))
        }

        fn delete(&self, _: &str, _: &str) -> Result<()> {
            Err(CipherError::key_store("locked"))
        }
    }

    fn no_prompt() -> anyhow::Result<SecretString> {
        panic!("prompt should not be called")
    }

    fn stored(value: &str) -> AppCipher<MemorySecretStore> {
        let cipher = AppCipher::new(MemorySecretStore::new());
        cipher.store_key(value).unwrap();
        cipher
    }

    #[test]
    fn test_env_wins_over_keychain() {
        let cipher = stored("from-keychain");
        let (value, source) = resolve_passphrase(
            &cipher,
            true,
            Some(SecretString::from("from-env")),
            true,
            no_prompt,
        )
        .unwrap();
        assert_eq!(value.expose_secret(), "from-env");
        assert_eq!(source, PassphraseSource::Env);
    }

    #[test]
    fn test_keychain_used_when_enabled() {
        let cipher = stored("from-keychain");
        let (value, source) = resolve_passphrase(&cipher, true, None, false, no_prompt).unwrap();
        assert_eq!(value.expose_secret(), "from-keychain");
        assert_eq!(source, PassphraseSource::Keychain);
    }

    #[test]
    fn test_keychain_skipped_when_disabled() {
        let cipher = stored("from-keychain");
        let (value, source) = resolve_passphrase(&cipher, false, None, true, || {
            Ok(SecretString::from("typed"))
        })
        .unwrap();
        assert_eq!(value.expose_secret(), "typed");
        assert_eq!(source, PassphraseSource::Prompt);
    }

    #[test]
    fn test_keychain_failure_falls_through_to_prompt() {
        let cipher = AppCipher::new(LockedStore);
        let (_, source) = resolve_passphrase(&cipher, true, None, true, || {
            Ok(SecretString::from("typed"))
        })
        .unwrap();
        assert_eq!(source, PassphraseSource::Prompt);
    }

    #[test]
    fn test_nothing_available_is_not_found() {
        let cipher = AppCipher::new(MemorySecretStore::new());
        let err = resolve_passphrase(&cipher, true, None, false, no_prompt).unwrap_err();
        let classified = classify(&err).expect("typed error");
        assert_eq!(classified.exit_code(), exit_codes::NOT_FOUND);
    }
}
