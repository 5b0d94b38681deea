use crate::cli::{AuthCommands, OutputFormat, Provider};
use crate::credentials::CredentialStore;
use anyhow::Result;
use colored::Colorize;

pub fn handle_auth(action: &AuthCommands, format: OutputFormat) -> Result<()> {
    match action {
        AuthCommands::Set { provider, token } => handle_set(*provider, token, format),
        AuthCommands::Show => handle_show(format),
        AuthCommands::Clear { provider } => handle_clear(*provider, format),
        AuthCommands::Path => {
            let path = CredentialStore::store_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn handle_set(provider: Provider, token: &str, format: OutputFormat) -> Result<()> {
    let mut store = CredentialStore::load()?;
    store.set_token(provider, token.to_string());
    store.save()?;

    match format {
        OutputFormat::Json => {
            println!(
                r#"{{"success": true, "message": "{} token saved"}}"#,
                provider.display_name()
            );
        }
        OutputFormat::Text => {
            println!("{} token saved.", provider.display_name());
        }
    }
    Ok(())
}

fn handle_show(format: OutputFormat) -> Result<()> {
    let store = CredentialStore::load()?;

    match format {
        OutputFormat::Json => {
            let masked = serde_json::json!({
                "github": store.token(Provider::GitHub).map(mask_token),
                "sonar": store.token(Provider::Sonar).map(mask_token),
            });
            println!("{}", serde_json::to_string_pretty(&masked)?);
        }
        OutputFormat::Text => {
            if store.is_empty() {
                println!("No credentials stored.");
                println!("Run 'gitopia auth set github <token>' to store one.");
                return Ok(());
            }
            for provider in [Provider::GitHub, Provider::Sonar] {
                match store.token(provider) {
                    Some(token) => {
                        println!("{}: {}", provider.display_name(), mask_token(token))
                    }
                    None => println!(
                        "{}: {}",
                        provider.display_name(),
                        "not set".dimmed()
                    ),
                }
            }
        }
    }
    Ok(())
}

fn handle_clear(provider: Option<Provider>, format: OutputFormat) -> Result<()> {
    let mut store = CredentialStore::load()?;
    let cleared = match provider {
        Some(provider) => {
            store.clear_token(provider);
            provider.display_name()
        }
        None => {
            store.clear_token(Provider::GitHub);
            store.clear_token(Provider::Sonar);
            "All"
        }
    };
    store.save()?;

    match format {
        OutputFormat::Json => {
            println!(r#"{{"success": true, "message": "{} credentials cleared"}}"#, cleared);
        }
        OutputFormat::Text => {
            println!("{} credentials cleared.", cleared);
        }
    }
    Ok(())
}

/// Leading characters only, enough to recognize a token without
/// exposing it
fn mask_token(token: &str) -> String {
    let prefix: String = token.chars().take(4).collect();
    format!("{}...", prefix)
}
