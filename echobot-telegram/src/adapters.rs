//! Adapters from Telegram (teloxide) types to echobot_core types.
//! Depends only on teloxide and echobot_core type definitions.

use echobot_core::{Chat, InboundEvent, Sender, ToInboundEvent, ToSender};

/// Wraps a teloxide User for conversion to core [`Sender`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToSender for TelegramUserWrapper<'a> {
    fn to_sender(&self) -> Sender {
        Sender {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: self.0.first_name.clone(),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`InboundEvent`]. The event kind is decided
/// here, once, from the message text.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToInboundEvent for TelegramMessageWrapper<'a> {
    fn to_event(&self) -> InboundEvent {
        InboundEvent::new(
            self.0.id.0.to_string(),
            self.0.from.as_ref().map(|u| TelegramUserWrapper(u).to_sender()),
            Chat {
                id: self.0.chat.id.0,
                chat_type: self.chat_type().to_string(),
            },
            self.0.text().map(str::to_string),
        )
        .with_received_at(self.0.date)
    }
}

impl<'a> TelegramMessageWrapper<'a> {
    fn chat_type(&self) -> &'static str {
        let chat = &self.0.chat;
        if chat.is_private() {
            "private"
        } else if chat.is_group() {
            "group"
        } else if chat.is_supergroup() {
            "supergroup"
        } else if chat.is_channel() {
            "channel"
        } else {
            "unknown"
        }
    }
}
