use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use appcipher_core::{EncryptionAlgorithm, VERSION};

/// AppCipher - passphrase-based AES-256-GCM text encryption
#[derive(Parser)]
#[command(name = "appcipher")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Override the configured algorithm (aes256_gcm)
    #[arg(long, global = true, value_parser = parse_algorithm)]
    pub algorithm: Option<EncryptionAlgorithm>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init(InitArgs),

    /// Manage the key stored in the OS keychain
    #[command(subcommand)]
    Key(KeyCommands),

    /// Encrypt text
    Encrypt(EncryptArgs),

    /// Decrypt an envelope
    Decrypt(DecryptArgs),

    /// Encrypt KEY=VALUE pairs as a JSON object
    EncryptMap(EncryptMapArgs),

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,

    /// Disable the OS keychain in the written config
    #[arg(long)]
    pub no_keychain: bool,
}

#[derive(Subcommand)]
pub enum KeyCommands {
    /// Store a key (replaces any existing key)
    Set {
        /// Disable interactive prompts (reads APPCIPHER_KEY)
        #[arg(long)]
        no_input: bool,
    },

    /// Show whether a key is stored
    Status {
        /// Print the stored key
        #[arg(long)]
        reveal: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove the stored key
    Remove,
}

/// Arguments for the `encrypt` command
#[derive(Args)]
pub struct EncryptArgs {
    /// Text to encrypt (reads stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Emit base64(ciphertext || tag || iv) instead of the combined envelope
    #[arg(long)]
    pub split: bool,

    /// Decrypt the result again and check it matches the input
    #[arg(long)]
    pub verify: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `decrypt` command
#[derive(Args)]
pub struct DecryptArgs {
    /// Base64 envelope to decrypt (reads stdin when omitted)
    #[arg(value_name = "ENVELOPE")]
    pub envelope: Option<String>,

    /// Treat the input as base64(ciphertext || tag || iv)
    #[arg(long)]
    pub split: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `encrypt-map` command
#[derive(Args)]
pub struct EncryptMapArgs {
    /// Pairs to encrypt
    #[arg(value_name = "KEY=VALUE", required = true)]
    pub pairs: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

fn parse_algorithm(value: &str) -> Result<EncryptionAlgorithm, String> {
    value.parse().map_err(|e: appcipher_core::CipherError| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_encrypt_flags() {
        let cli = Cli::try_parse_from(["appcipher", "encrypt", "hello", "--split", "--verify"])
            .unwrap();
        match cli.command {
            Commands::Encrypt(args) => {
                assert_eq!(args.text.as_deref(), Some("hello"));
                assert!(args.split);
                assert!(args.verify);
            }
            _ => panic!("expected encrypt"),
        }
    }

    #[test]
    fn test_parse_algorithm_flag() {
        let cli = Cli::try_parse_from(["appcipher", "--algorithm", "aes256", "decrypt", "abc"])
            .unwrap();
        assert_eq!(cli.algorithm, Some(EncryptionAlgorithm::Aes256Gcm));

        let result = Cli::try_parse_from(["appcipher", "--algorithm", "rot13", "decrypt", "abc"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_encrypt_map_requires_pairs() {
        assert!(Cli::try_parse_from(["appcipher", "encrypt-map"]).is_err());
    }
}
