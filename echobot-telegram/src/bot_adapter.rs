//! Wraps teloxide::Bot and implements [`echobot_core::Bot`]. Production code sends messages via
//! Telegram; tests can substitute another Bot impl.

use async_trait::async_trait;
use echobot_core::{Bot as CoreBot, BotError, MarkupMode, OutboundResponse, Result};
use teloxide::{prelude::*, types::ChatId, types::ParseMode};
use tracing::debug;

/// Thin wrapper around teloxide::Bot that implements echobot-core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send(&self, response: &OutboundResponse) -> Result<()> {
        let chat_id = ChatId(response.chat().id);
        let request = self.bot.send_message(chat_id, response.text());
        let request = match response.markup() {
            MarkupMode::Html => request.parse_mode(ParseMode::Html),
            MarkupMode::Plain => request,
        };

        let sent = request
            .await
            .map_err(|e| BotError::Delivery(e.to_string()))?;
        debug!(chat_id = chat_id.0, message_id = sent.id.0, "Message delivered");
        Ok(())
    }
}
