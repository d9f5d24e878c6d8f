use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome taxonomy for platform calls. Callers branch on the variant:
/// an unreachable chat evicts the user, a missing delete target counts as
/// success, a non-deletable message halts the current cleanup category.
#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("chat unreachable: {0}")]
    ChatUnreachable(String),

    #[error("message not found: {0}")]
    MessageNotFound(String),

    #[error("message not deletable: {0}")]
    MessageNotDeletable(String),

    #[error("request rejected: {0}")]
    Rejected(String),
}

pub type Result<T> = std::result::Result<T, BotError>;
