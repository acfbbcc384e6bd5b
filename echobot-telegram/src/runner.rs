//! Polling runner: teloxide's REPL feeds converted messages into a channel, and
//! [`echobot_dispatch::run`] dispatches them.

use std::sync::Arc;

use anyhow::Result;
use echobot_core::{Bot as CoreBot, ToInboundEvent};
use echobot_dispatch::{run, ChannelEventSource, Dispatcher, RunSummary};
use teloxide::prelude::*;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;
use super::bot_adapter::TelegramBotAdapter;
use super::config::TelegramConfig;

/// Events buffered between the REPL and the dispatch loop.
const EVENT_BUFFER: usize = 256;

/// Builds the teloxide Bot for `config`, honouring the API URL override.
pub fn build_bot(config: &TelegramConfig) -> Result<teloxide::Bot> {
    let bot = teloxide::Bot::new(config.bot_token.clone());
    Ok(match config.api_url()? {
        Some(url) => bot.set_api_url(url),
        None => bot,
    })
}

/// Long-polls Telegram until Ctrl-C, dispatching every message through `dispatcher`.
///
/// Calls getMe first so commands addressed to other bots can be ignored; if that fails the bot
/// still starts. On shutdown, in-flight dispatches finish before this returns.
#[instrument(skip(config, dispatcher))]
pub async fn run_polling(config: TelegramConfig, dispatcher: Dispatcher) -> Result<RunSummary> {
    config.validate()?;
    let bot = build_bot(&config)?;

    let dispatcher = match bot.get_me().await {
        Ok(me) => match &me.user.username {
            Some(username) => {
                info!(username = %username, "Bot username set before repl");
                dispatcher.with_bot_username(username.clone())
            }
            None => dispatcher,
        },
        Err(e) => {
            warn!(
                error = %e,
                "getMe failed; commands addressed to other bots will not be filtered"
            );
            dispatcher
        }
    };

    let (tx, source) = ChannelEventSource::channel(EVENT_BUFFER);
    let listener = tokio::spawn(listen(bot.clone(), tx));

    let adapter: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(bot));
    let summary = run(source, adapter, Arc::new(dispatcher)).await;

    listener.await?;
    Ok(summary)
}

/// Runs the teloxide REPL, converting each message to an event and forwarding it to `tx`.
/// Returns when the REPL stops (Ctrl-C); dropping `tx` then ends the dispatch loop.
async fn listen(bot: teloxide::Bot, tx: mpsc::Sender<echobot_core::InboundEvent>) {
    info!("Starting Telegram polling");
    teloxide::repl(bot, move |msg: Message| {
        let tx = tx.clone();
        async move {
            let event = TelegramMessageWrapper(&msg).to_event();
            match msg.text() {
                Some(text) => info!(
                    user_id = event.sender_id(),
                    chat_id = event.chat.id,
                    message_content = %text,
                    "Received message"
                ),
                None => info!(
                    user_id = event.sender_id(),
                    chat_id = event.chat.id,
                    "Received non-text message"
                ),
            }
            if tx.send(event).await.is_err() {
                debug!("Dispatch loop closed, dropping message");
            }
            respond(())
        }
    })
    .await;
    info!("Telegram polling stopped");
}
