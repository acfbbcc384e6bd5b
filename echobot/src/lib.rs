//! # Echo bot application
//!
//! Wires the handlers into a dispatcher, loads config from env and runs Telegram polling.

pub mod cli;

use std::sync::Arc;

use anyhow::Result;
use echobot_core::{ErrorReporter, TracingErrorReporter};
use echobot_dispatch::Dispatcher;
use echobot_handlers::{EchoHandler, HelpHandler, StartHandler};
use echobot_telegram::{run_polling, TelegramConfig};
use tracing::{error, info, instrument};

pub use cli::{Cli, Commands};

/// Dispatcher with `/start`, `/help` and the echo text handler.
pub fn build_dispatcher(reporter: Arc<dyn ErrorReporter>) -> Dispatcher {
    Dispatcher::new(reporter)
        .add_command("start", Arc::new(StartHandler::new()))
        .add_command("help", Arc::new(HelpHandler::new()))
        .set_text_handler(Arc::new(EchoHandler::new()))
}

/// Loads config and runs the bot until shutdown.
///
/// A missing token is logged and returned before any Telegram client is created.
#[instrument(skip(token))]
pub async fn run_bot(token: Option<String>) -> Result<()> {
    let config = TelegramConfig::load(token).map_err(|e| {
        error!(
            error = %e,
            "Bot token not found! Please set the BOT_TOKEN environment variable or pass --token."
        );
        e
    })?;

    let dispatcher = build_dispatcher(Arc::new(TracingErrorReporter::new()));

    info!("Starting bot polling...");
    let summary = run_polling(config, dispatcher).await?;
    info!(
        received = summary.received,
        sent = summary.sent,
        ignored = summary.ignored,
        handler_failed = summary.handler_failed,
        delivery_failed = summary.delivery_failed,
        "Bot stopped"
    );
    Ok(())
}
