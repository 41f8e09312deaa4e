//! AppCipher CLI - passphrase-based AES-256-GCM text encryption
//!
//! This is the command-line interface for AppCipher. It provides a
//! user-friendly interface to the core library functionality.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod security;
mod ui;

use clap::Parser;

use app::AppContext;
use cli::{Cli, Commands, KeyCommands};
use commands::{
    handle_completions, handle_decrypt, handle_encrypt, handle_encrypt_map, handle_init,
    handle_key_remove, handle_key_set, handle_key_status,
};
use errors::classify;
use logging::init_logging;
use ui::{print_error, UiContext};

fn main() {
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    let level = ctx
        .config()
        .map(|config| config.logging.level.clone())
        .unwrap_or_else(|_| "warn".to_string());
    init_logging(&level);

    if let Err(err) = run(&ctx, &cli) {
        tracing::debug!(error = ?err, "command failed");
        let ui = UiContext::from_env(false, cli.no_color);
        match classify(&err) {
            Some(cli_err) => {
                let message = cli_err.to_string();
                let (first, rest) = message
                    .split_once('\n')
                    .map(|(first, rest)| (first, Some(rest)))
                    .unwrap_or((message.as_str(), None));
                print_error(&ui, first, rest);
                std::process::exit(cli_err.exit_code());
            }
            None => {
                print_error(&ui, &format!("{:#}", err), None);
                std::process::exit(1);
            }
        }
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Init(args) => handle_init(ctx, args),
        Commands::Key(KeyCommands::Set { no_input }) => handle_key_set(ctx, *no_input),
        Commands::Key(KeyCommands::Status { reveal, json }) => {
            handle_key_status(ctx, *reveal, *json)
        }
        Commands::Key(KeyCommands::Remove) => handle_key_remove(ctx),
        Commands::Encrypt(args) => handle_encrypt(ctx, args),
        Commands::Decrypt(args) => handle_decrypt(ctx, args),
        Commands::EncryptMap(args) => handle_encrypt_map(ctx, args),
        Commands::Completions { shell } => handle_completions(*shell),
    }
}
