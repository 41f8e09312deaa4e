use std::io::IsTerminal;

use secrecy::ExposeSecret;

use crate::app::AppContext;
use crate::helpers::prompt_new_passphrase;
use crate::ui::{badge, hint, kv, print, Badge};

pub fn handle_key_set(ctx: &AppContext, no_input: bool) -> anyhow::Result<()> {
    let cipher = ctx.cipher()?;
    let interactive = !no_input && std::io::stdin().is_terminal();
    let passphrase = prompt_new_passphrase(interactive)?;
    cipher.store_key(passphrase.expose_secret())?;

    if ctx.quiet() {
        return Ok(());
    }
    let ui = ctx.ui(false);
    print(&ui, &badge(&ui, Badge::Ok, "Key stored"));
    print(&ui, &kv(&ui, "Service", &cipher.identity().service));
    print(&ui, &kv(&ui, "Account", &cipher.identity().account));
    if !ctx.keychain_enabled()? {
        print(
            &ui,
            &badge(
                &ui,
                Badge::Warn,
                "Keychain is disabled in config; encrypt and decrypt will not use this key",
            ),
        );
    }
    Ok(())
}

pub fn handle_key_status(ctx: &AppContext, reveal: bool, json: bool) -> anyhow::Result<()> {
    let cipher = ctx.cipher()?;
    let stored = cipher.retrieve_key()?;
    let identity = cipher.identity();
    let ui = ctx.ui(json);

    if ui.mode.is_json() {
        let mut output = serde_json::json!({
            "service": identity.service,
            "account": identity.account,
            "stored": stored.is_some(),
            "keychain_enabled": ctx.keychain_enabled()?,
        });
        if reveal {
            output["key"] = serde_json::json!(stored.as_deref());
        }
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let status = if stored.is_some() {
        badge(&ui, Badge::Ok, "Key stored")
    } else {
        badge(&ui, Badge::Info, "No key stored")
    };
    print(&ui, &status);
    print(&ui, &kv(&ui, "Service", &identity.service));
    print(&ui, &kv(&ui, "Account", &identity.account));
    match (&stored, reveal) {
        (Some(key), true) => print(&ui, &kv(&ui, "Key", key)),
        (None, _) if !ctx.quiet() => print(&ui, &hint(&ui, "appcipher key set")),
        _ => {}
    }
    Ok(())
}

pub fn handle_key_remove(ctx: &AppContext) -> anyhow::Result<()> {
    let cipher = ctx.cipher()?;
    cipher.remove_key()?;

    if !ctx.quiet() {
        let ui = ctx.ui(false);
        print(&ui, &badge(&ui, Badge::Ok, "Key removed"));
    }
    Ok(())
}
