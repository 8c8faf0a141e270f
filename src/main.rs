use clap::Parser;
use std::path::Path;

mod cli;
mod core;
mod models;
mod generators;
mod importers;

use crate::cli::Args;
use crate::core::config::Config;
use crate::core::CredentialStore;
use crate::generators::PasswordGenerator;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let mut config = Config::load();
    if let Some(store_path) = &args.store {
        config.store_path = store_path.clone();
    }

    // RUST_LOG still wins over LOG_LEVEL when set
    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .format_timestamp_secs()
        .format_module_path(true)
        .init();

    for (key, value) in &config.ignored {
        log::warn!("Ignoring unknown {} value '{}', using {}", key, value, config.log_level);
    }
    log::debug!("Loaded config: {:?}", config);

    let store = CredentialStore::new(&config.store_path);
    let generator = PasswordGenerator::new();

    match args.command {
        Some(command) => cli::handlers::execute(command, &config, &store, &generator)?,
        None => cli::menu::run_cli_menu(&config, &store, &generator)?,
    }

    Ok(())
}
