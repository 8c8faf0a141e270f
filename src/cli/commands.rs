// src/cli/commands.rs
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a password
    Generate,

    /// Save a login for a website
    Add {
        /// Website or service name
        #[arg(required = true)]
        site: String,

        /// Email or username (defaults to DEFAULT_EMAIL)
        #[arg(long, short)]
        email: Option<String>,

        /// Password to store
        #[arg(long, short, conflicts_with = "generate")]
        password: Option<String>,

        /// Generate the password instead of prompting for it
        #[arg(long, short)]
        generate: bool,

        /// Save without asking for confirmation
        #[arg(long, short)]
        yes: bool,
    },

    /// Look up the login saved for a website
    Find {
        /// Website or service name
        #[arg(required = true)]
        site: String,
    },

    /// List saved websites
    List,

    /// Import the plain-text log written by older versions
    ImportLegacy {
        /// Path to the old log (defaults to LEGACY_FILE or data.txt)
        path: Option<PathBuf>,
    },
}
