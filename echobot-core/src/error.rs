//! Error types for the bot core.
//!
//! [`BotError`] is the top-level error; [`ConfigError`] is fatal at startup, [`HandlerError`] and
//! delivery failures are recovered per event by the dispatcher.

use thiserror::Error;

/// Top-level error (config, handler, delivery, task, IO).
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),

    #[error("Delivery error: {0}")]
    Delivery(String),

    #[error("Task error: {0}")]
    Task(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Startup configuration failures. Not retryable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("BOT_TOKEN not set")]
    MissingToken,

    #[error("TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {0}")]
    InvalidApiUrl(String),
}

/// Errors produced while computing a response for one event.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandlerError {
    #[error("No text in message")]
    NoText,

    #[error("Message has no sender")]
    MissingSender,

    #[error("Response addressed to chat {actual}, event came from chat {expected}")]
    ConversationMismatch { expected: i64, actual: i64 },

    #[error("Handler panicked: {0}")]
    Panicked(String),
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
