use clap::Subcommand;

use crate::cli::subcommands::AuthCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Show the resolved API base URL and runtime mode.
    Config,
    /// Session authentication against the backend.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
}
