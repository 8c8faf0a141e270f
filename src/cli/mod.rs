// src/cli/mod.rs
use clap::Parser;
use std::path::PathBuf;

use crate::core::config::STORE_ENV;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path of the JSON data file
    #[arg(long, short, env = STORE_ENV)]
    pub store: Option<PathBuf>,

    /// Command to execute (interactive menu when omitted)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
