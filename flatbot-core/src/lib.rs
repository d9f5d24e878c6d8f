//! # flatbot-core
//!
//! Core types and traits for the rental-listing bot: [`Bot`], [`Handler`], chat and
//! message types, the platform error taxonomy, and tracing initialization.
//! Transport-agnostic; the teloxide adapter lives in the `flatbot` crate.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, PlatformError, Result};
pub use logger::init_tracing;
pub use types::{Chat, Handler, HandlerResponse, Message};
