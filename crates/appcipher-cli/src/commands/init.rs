use crate::app::AppContext;
use crate::cli::InitArgs;
use crate::config::{write_config, AppCipherConfig};
use crate::errors::CliError;
use crate::ui::{badge, hint, kv, print, Badge};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let path = ctx.config_path()?;
    if path.exists() && !args.force {
        return Err(CliError::invalid_input(format!(
            "Config already exists: {}\nUse --force to overwrite.",
            path.display()
        ))
        .into());
    }

    let mut config = AppCipherConfig::default();
    config.keychain.enabled = !args.no_keychain;
    write_config(path, &config)?;
    tracing::info!(path = %path.display(), "wrote config");

    if ctx.quiet() {
        return Ok(());
    }
    let ui = ctx.ui(false);
    print(&ui, &badge(&ui, Badge::Ok, "Config written"));
    print(&ui, &kv(&ui, "Path", &path.display().to_string()));
    print(&ui, &kv(&ui, "Algorithm", config.cipher.algorithm.as_str()));
    print(
        &ui,
        &kv(&ui, "Keychain", if config.keychain.enabled { "enabled" } else { "disabled" }),
    );
    if config.keychain.enabled {
        print(&ui, &hint(&ui, "appcipher key set"));
    }
    Ok(())
}
