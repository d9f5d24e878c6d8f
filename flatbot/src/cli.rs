//! Command-line interface.

use crate::config::BotConfig;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "flatbot", version, about = "Rental-listing notification bot")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot: long polling plus the periodic listing/cleanup scheduler.
    Run {
        /// Bot API token; overrides the BOT_TOKEN environment variable.
        #[arg(long)]
        token: Option<String>,
    },
}

/// Loads configuration from the environment, with an optional token override.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}
