use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use secrecy::ExposeSecret;
use zeroize::Zeroizing;

use appcipher_core::SplitEnvelope;

use crate::app::AppContext;
use crate::cli::{DecryptArgs, EncryptArgs, EncryptMapArgs};
use crate::errors::CliError;
use crate::helpers::{parse_pair, read_input};
use crate::ui::render::{divider, header};
use crate::ui::{badge, print, Badge};

pub fn handle_encrypt(ctx: &AppContext, args: &EncryptArgs) -> anyhow::Result<()> {
    let text = Zeroizing::new(read_input(args.text.clone(), "text")?);
    let algorithm = ctx.algorithm()?;
    let cipher = ctx.cipher()?;
    let (passphrase, source) = ctx.passphrase(&cipher, args.no_input)?;
    let passphrase = passphrase.expose_secret();
    tracing::debug!(algorithm = %algorithm, source = source.as_str(), split = args.split, "encrypting");

    let ui = ctx.ui(args.json);

    if args.split {
        let envelope = cipher.encrypt_split(algorithm, passphrase, &text)?;
        if args.verify {
            let roundtrip = Zeroizing::new(cipher.decrypt_split(
                algorithm,
                passphrase,
                &envelope.combined,
                &envelope.iv,
            )?);
            ensure_roundtrip(&text, &roundtrip)?;
        }
        if ui.mode.is_json() {
            let output = serde_json::json!({
                "algorithm": algorithm.as_str(),
                "combined": STANDARD.encode(&envelope.combined),
                "iv": STANDARD.encode(&envelope.iv),
                "packed": envelope.to_packed_base64(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", envelope.to_packed_base64());
        }
    } else {
        let envelope = cipher.encrypt(algorithm, passphrase, &text)?;
        if args.verify {
            let roundtrip = Zeroizing::new(cipher.decrypt(algorithm, passphrase, &envelope)?);
            ensure_roundtrip(&text, &roundtrip)?;
        }
        if ui.mode.is_json() {
            let output = serde_json::json!({
                "algorithm": algorithm.as_str(),
                "envelope": envelope,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", envelope);
        }
    }

    if args.verify && ui.mode.is_pretty() && !ctx.quiet() {
        eprintln!("{}", badge(&ui, Badge::Ok, "Verified"));
    }
    Ok(())
}

pub fn handle_decrypt(ctx: &AppContext, args: &DecryptArgs) -> anyhow::Result<()> {
    let encoded = read_input(args.envelope.clone(), "envelope")?;
    let algorithm = ctx.algorithm()?;
    let cipher = ctx.cipher()?;
    let (passphrase, source) = ctx.passphrase(&cipher, args.no_input)?;
    let passphrase = passphrase.expose_secret();
    tracing::debug!(algorithm = %algorithm, source = source.as_str(), split = args.split, "decrypting");

    let plaintext = if args.split {
        let envelope = SplitEnvelope::from_packed_base64(&encoded)?;
        cipher.decrypt_split(algorithm, passphrase, &envelope.combined, &envelope.iv)?
    } else {
        cipher.decrypt(algorithm, passphrase, &encoded)?
    };
    let plaintext = Zeroizing::new(plaintext);

    if args.json {
        let output = serde_json::json!({
            "algorithm": algorithm.as_str(),
            "plaintext": plaintext.as_str(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", plaintext.as_str());
    }
    Ok(())
}

pub fn handle_encrypt_map(ctx: &AppContext, args: &EncryptMapArgs) -> anyhow::Result<()> {
    let pairs = args
        .pairs
        .iter()
        .map(|raw| parse_pair(raw))
        .collect::<Result<Vec<_>, _>>()?;
    let algorithm = ctx.algorithm()?;
    let cipher = ctx.cipher()?;
    let (passphrase, _) = ctx.passphrase(&cipher, args.no_input)?;

    let (map, envelope) = cipher.encrypt_map(algorithm, passphrase.expose_secret(), pairs)?;

    let ui = ctx.ui(args.json);
    if ui.mode.is_json() {
        let output = serde_json::json!({
            "algorithm": algorithm.as_str(),
            "values": map,
            "envelope": envelope,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if ui.mode.is_pretty() && !ctx.quiet() {
        print(&ui, &header(&ui, "encrypt-map"));
        print(&ui, &serde_json::to_string_pretty(&map)?);
        print(&ui, &divider(&ui));
    }
    println!("{}", envelope);
    Ok(())
}

fn ensure_roundtrip(expected: &str, actual: &str) -> anyhow::Result<()> {
    if expected != actual {
        return Err(CliError::invalid_input("Verification failed: decrypted text differs").into());
    }
    Ok(())
}
