//! Inbound-message handlers: unconditional archiving, then command dispatch.

pub mod archive_handler;
pub mod command_handler;

pub use archive_handler::ArchiveHandler;
pub use command_handler::CommandHandler;
