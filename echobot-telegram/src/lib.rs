//! # echobot-telegram
//!
//! Telegram layer: adapters, [`echobot_core::Bot`] implementation, config loader, polling runner.
//! Handles only Telegram connectivity; routing lives in echobot-dispatch.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::TelegramConfig;
pub use runner::{build_bot, run_polling};
