// src/cli/handlers.rs
use crate::core::config::Config;
use crate::core::store::{CredentialStore, StoreError};
use crate::generators::PasswordGenerator;
use crate::importers::{ImportError, LegacyImporter};
use crate::models::{Credential, ImportSummary};
use inquire::{Confirm, Password, Text};
use std::path::Path;
use thiserror::Error;

use super::CliCommand;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Please don't leave any fields empty! Missing: {0}")]
    Validation(String),

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("Import failed: {0}")]
    Import(#[from] ImportError),

    #[error("Prompt error: {0}")]
    Prompt(#[from] inquire::InquireError),
}

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Cancelled,
}

// Every field is required before anything reaches the store
pub fn validate_fields(site: &str, email: &str, password: &str) -> Result<()> {
    let missing: Vec<&str> = [("website", site), ("email/login", email), ("password", password)]
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CliError::Validation(missing.join(", ")))
    }
}

pub fn confirmation_message(site: &str, email: &str, password: &str, existing: Option<&Credential>) -> String {
    let mut message = format!(
        "These are the details entered:\n\n  Website: {}\n  Email/Login: {}\n  Password: {}\n",
        site, email, password
    );

    if let Some(current) = existing {
        message.push_str(&format!(
            "\n  This replaces the saved login for {} ({}).\n",
            current.site, current.email
        ));
    }

    message.push_str("\nIs it OK to save?");
    message
}

/// Validate, ask for confirmation, then upsert.
///
/// Site and email are trimmed here so every front end keys logins the same
/// way; the password is stored exactly as given.
///
/// `confirm` receives the summary text and decides whether to go ahead, so
/// callers can prompt, auto-accept, or script the answer in tests.
pub fn handle_save<F>(store: &CredentialStore, site: &str, email: &str, password: &str, confirm: F) -> Result<SaveOutcome>
where
    F: FnOnce(&str) -> Result<bool>,
{
    let site = site.trim();
    let email = email.trim();
    validate_fields(site, email, password)?;

    let existing = match store.lookup(site) {
        Ok(credential) => Some(credential),
        Err(StoreError::StoreMissing) | Err(StoreError::NoSuchSite(_)) => None,
        Err(e) => return Err(e.into()),
    };

    let message = confirmation_message(site, email, password, existing.as_ref());
    if !confirm(&message)? {
        log::debug!("Save for {} cancelled", site);
        return Ok(SaveOutcome::Cancelled);
    }

    store.upsert(site, email, password)?;
    Ok(SaveOutcome::Saved)
}

pub fn handle_find(store: &CredentialStore, site: &str) -> Result<Credential> {
    let site = site.trim();
    if site.is_empty() {
        return Err(CliError::Validation("website".to_string()));
    }
    Ok(store.lookup(site)?)
}

pub fn handle_list(store: &CredentialStore) -> Result<Vec<String>> {
    Ok(store.sites()?)
}

pub fn handle_import(store: &CredentialStore, path: &Path) -> Result<ImportSummary> {
    Ok(LegacyImporter::new().import(path, store)?)
}

pub fn print_generated(generator: &PasswordGenerator, password: &str) {
    println!("🔐 Generated password: {}", password);
    println!("Password strength: {}/100", generator.analyze_password_strength(password));
}

pub fn print_credential(generator: &PasswordGenerator, credential: &Credential) {
    println!("\n🔐 Login Details");
    println!("Website: {}", credential.site);
    println!("Email/Login: {}", credential.email);
    println!("Password: {}", credential.password);
    println!("Password strength: {}/100", generator.analyze_password_strength(&credential.password));
}

pub fn prompt_confirm(message: &str) -> Result<bool> {
    Ok(Confirm::new(message).with_default(false).prompt()?)
}

// Run a single subcommand and report the result on stdout
pub fn execute(
    command: CliCommand,
    config: &Config,
    store: &CredentialStore,
    generator: &PasswordGenerator,
) -> Result<()> {
    match command {
        CliCommand::Generate => {
            let password = generator.generate_password();
            print_generated(generator, &password);
        }
        CliCommand::Add { site, email, password, generate, yes } => {
            let email = match email.or_else(|| config.default_email.clone()) {
                Some(email) => email,
                None => Text::new("Email/Username:").prompt()?,
            };

            let password = match password {
                Some(password) => password,
                None if generate => {
                    let password = generator.generate_password();
                    print_generated(generator, &password);
                    password
                }
                None => Password::new("Password:")
                    .with_display_mode(inquire::PasswordDisplayMode::Hidden)
                    .without_confirmation()
                    .prompt()?,
            };

            let outcome = if yes {
                handle_save(store, &site, &email, &password, |_| Ok(true))?
            } else {
                handle_save(store, &site, &email, &password, prompt_confirm)?
            };

            match outcome {
                SaveOutcome::Saved => println!("✅ Saved login for {}", site.trim()),
                SaveOutcome::Cancelled => println!("Nothing saved."),
            }
        }
        CliCommand::Find { site } => {
            let credential = handle_find(store, &site)?;
            print_credential(generator, &credential);
        }
        CliCommand::List => {
            let sites = handle_list(store)?;
            if sites.is_empty() {
                println!("❗ No logins stored yet.");
            } else {
                for site in sites {
                    println!("{}", site);
                }
            }
        }
        CliCommand::ImportLegacy { path } => {
            let path = path.unwrap_or_else(|| config.legacy_file.clone());
            let summary = handle_import(store, &path)?;
            println!(
                "✅ Imported {} line(s) into {} site(s)",
                summary.lines_read, summary.sites_written
            );
        }
    }

    Ok(())
}
