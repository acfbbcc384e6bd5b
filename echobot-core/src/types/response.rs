//! Outbound response produced by a handler.

use serde::{Deserialize, Serialize};

use super::{chat::Chat, event::InboundEvent};

/// How the transport should interpret the response text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkupMode {
    Plain,
    /// Telegram HTML subset; the text must already be escaped.
    Html,
}

/// Text to send back into the chat of the event it answers.
///
/// Only constructible from an [`InboundEvent`], so the target chat is always the originating one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundResponse {
    chat: Chat,
    text: String,
    markup: MarkupMode,
}

impl OutboundResponse {
    pub fn plain(event: &InboundEvent, text: impl Into<String>) -> Self {
        Self::reply(event, text, MarkupMode::Plain)
    }

    pub fn html(event: &InboundEvent, text: impl Into<String>) -> Self {
        Self::reply(event, text, MarkupMode::Html)
    }

    fn reply(event: &InboundEvent, text: impl Into<String>, markup: MarkupMode) -> Self {
        Self {
            chat: event.chat.clone(),
            text: text.into(),
            markup,
        }
    }

    pub fn chat(&self) -> &Chat {
        &self.chat
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn markup(&self) -> MarkupMode {
        self.markup
    }
}
