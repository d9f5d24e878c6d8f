//! # Flatbot
//!
//! Rental-listing notification bot: a scheduler periodically scrapes one
//! listing source and forwards new listings to every subscriber, deduplicated
//! against a per-user delivery ledger; `/clear` deletes obsolete bot messages
//! from the chat, keeping listing links that are still alive.
//! Wires flatbot-core (types, Bot trait) and storage (delivery ledger) with
//! the teloxide transport.

pub mod chain;
pub mod cleanup;
pub mod cli;
pub mod components;
pub mod config;
pub mod handlers;
pub mod listings;
pub mod liveness;
pub mod notifier;
pub mod runner;
pub mod scheduler;
pub mod telegram;
pub mod user_locks;

// Re-export core so binaries and tests use one import path.
pub use flatbot_core::{Bot, BotError, Chat, Handler, HandlerResponse, Message, PlatformError};

pub use chain::HandlerChain;
pub use cleanup::{CleanupEngine, CleanupReport};
pub use cli::{load_config, Cli, Commands};
pub use components::{build_components, BotComponents};
pub use config::BotConfig;
pub use handlers::{ArchiveHandler, CommandHandler};
pub use listings::{Listing, ListingFetcher, ListingSourceConfig, RentFilters};
pub use liveness::{is_well_formed_url, HttpUrlProbe, UrlProbe};
pub use notifier::{Notifier, NotifyReport};
pub use runner::run_bot;
pub use scheduler::Scheduler;
pub use telegram::{run_repl, TelegramBotAdapter};
pub use user_locks::UserLocks;
