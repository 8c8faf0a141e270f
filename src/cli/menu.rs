// src/cli/menu.rs
use crate::core::config::Config;
use crate::core::store::CredentialStore;
use crate::generators::PasswordGenerator;
use inquire::{CustomUserError, InquireError, Password, Select, Text};
use std::path::Path;

use super::handlers::{self, CliError, SaveOutcome};

const GENERATE: &str = "🔐  Generate password";
const ADD: &str = "1️⃣  Add a login";
const SEARCH: &str = "🔍  Search by website";
const LIST: &str = "📋  List saved websites";
const IMPORT: &str = "📥  Import old data.txt";
const EXIT: &str = "❌  Exit";

pub fn run_cli_menu(config: &Config, store: &CredentialStore, generator: &PasswordGenerator) -> Result<(), CliError> {
    println!("🔒 Password Manager ({})", store.path().display());

    // Last generated password, offered when adding a login
    let mut last_generated: Option<String> = None;

    loop {
        let options = vec![GENERATE, ADD, SEARCH, LIST, IMPORT, EXIT];

        let selection = match Select::new("Choose an option:", options)
            .with_help_message("Use arrow keys to navigate, Enter to select. Esc to exit.")
            .prompt_skippable()
        {
            Ok(Some(selection)) => selection,
            Ok(None) | Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        let result = match selection {
            GENERATE => {
                let password = generator.generate_password();
                handlers::print_generated(generator, &password);
                last_generated = Some(password);
                Ok(())
            }
            ADD => add_login(config, store, generator, last_generated.take()),
            SEARCH => search(store, generator),
            LIST => list(store),
            IMPORT => import(config, store),
            _ => break,
        };

        match result {
            Ok(()) => {}
            Err(CliError::Validation(missing)) => println!("⚠️ Oops! Please don't leave any fields empty! ({})", missing),
            Err(CliError::Prompt(InquireError::OperationCanceled)) => println!("Cancelled."),
            Err(CliError::Prompt(InquireError::OperationInterrupted)) => break,
            Err(e) => {
                log::error!("Menu action failed: {}", e);
                println!("❌ {}", e);
            }
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}

fn add_login(
    config: &Config,
    store: &CredentialStore,
    generator: &PasswordGenerator,
    generated: Option<String>,
) -> Result<(), CliError> {
    let site = Text::new("Website:").prompt()?;

    let mut email_prompt = Text::new("Email/Username:");
    if let Some(default_email) = &config.default_email {
        email_prompt = email_prompt.with_default(default_email);
    }
    let email = email_prompt.prompt()?;

    let password = match generated {
        Some(password) => Text::new("Password:")
            .with_default(&password)
            .with_help_message("Enter to use the password generated last")
            .prompt()?,
        None => {
            let entered = Password::new("Password (leave empty to generate):")
                .with_display_mode(inquire::PasswordDisplayMode::Masked)
                .without_confirmation()
                .prompt()?;
            if entered.is_empty() {
                let password = generator.generate_password();
                handlers::print_generated(generator, &password);
                password
            } else {
                entered
            }
        }
    };

    match handlers::handle_save(store, &site, &email, &password, handlers::prompt_confirm)? {
        SaveOutcome::Saved => println!("✅ Saved login for {}", site.trim()),
        SaveOutcome::Cancelled => println!("Nothing saved."),
    }
    Ok(())
}

fn search(store: &CredentialStore, generator: &PasswordGenerator) -> Result<(), CliError> {
    let sites = store.sites()?;

    let site = if sites.is_empty() {
        Text::new("Website:").prompt()?
    } else {
        let suggestions = sites;
        Text::new("Website:")
            .with_autocomplete(move |input: &str| -> Result<Vec<String>, CustomUserError> {
                Ok(suggest_sites(&suggestions, input))
            })
            .prompt()?
    };

    let credential = handlers::handle_find(store, &site)?;
    handlers::print_credential(generator, &credential);
    Ok(())
}

// Case-insensitive substring match over the stored sites, keeping their order
fn suggest_sites(sites: &[String], input: &str) -> Vec<String> {
    let needle = input.trim().to_lowercase();
    sites
        .iter()
        .filter(|site| site.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

fn list(store: &CredentialStore) -> Result<(), CliError> {
    if !store.exists() {
        println!("❗ No data file found at {}", store.path().display());
        return Ok(());
    }

    let sites = handlers::handle_list(store)?;
    if sites.is_empty() {
        println!("❗ No logins stored yet.");
    } else {
        println!("\n📋 {} saved website(s)", sites.len());
        for site in sites {
            println!("  {}", site);
        }
    }
    Ok(())
}

fn import(config: &Config, store: &CredentialStore) -> Result<(), CliError> {
    let default_path = config.legacy_file.display().to_string();
    let path = Text::new("Path to old data file:")
        .with_default(&default_path)
        .prompt()?;

    let summary = handlers::handle_import(store, Path::new(path.trim()))?;
    println!(
        "✅ Imported {} line(s) into {} site(s)",
        summary.lines_read, summary.sites_written
    );
    Ok(())
}
