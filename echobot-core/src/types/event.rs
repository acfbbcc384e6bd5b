//! Inbound event: one received update, already classified by shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, command::CommandInvocation, sender::Sender};

/// What an event carries. Built once at the transport boundary so nothing downstream inspects
/// loose optional fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// Text shaped like `/name[@bot] [args]`.
    Command(CommandInvocation),
    /// Non-empty text that is not a command.
    Text(String),
    /// No text (sticker, photo, service message, ...).
    Other,
}

impl EventKind {
    /// Classifies raw message text.
    pub fn from_text(text: Option<&str>) -> Self {
        match text {
            None | Some("") => EventKind::Other,
            Some(text) => match CommandInvocation::parse(text) {
                Some(command) => EventKind::Command(command),
                None => EventKind::Text(text.to_string()),
            },
        }
    }
}

/// A single received message with sender, chat and classified content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundEvent {
    /// Transport-specific message id.
    pub id: String,
    /// Absent for anonymous channel posts.
    pub sender: Option<Sender>,
    pub chat: Chat,
    pub kind: EventKind,
    /// Raw message text, kept for logging and for handlers that need the original line.
    pub text: Option<String>,
    pub received_at: DateTime<Utc>,
}

impl InboundEvent {
    /// Builds an event from raw text, classifying it with [`EventKind::from_text`].
    pub fn new(
        id: impl Into<String>,
        sender: Option<Sender>,
        chat: Chat,
        text: Option<String>,
    ) -> Self {
        let kind = EventKind::from_text(text.as_deref());
        Self {
            id: id.into(),
            sender,
            chat,
            kind,
            text,
            received_at: Utc::now(),
        }
    }

    /// Overrides the receive time (e.g. with the platform's message date).
    pub fn with_received_at(mut self, received_at: DateTime<Utc>) -> Self {
        self.received_at = received_at;
        self
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Sender id, or 0 when there is no sender. For log fields.
    pub fn sender_id(&self) -> i64 {
        self.sender.as_ref().map(|s| s.id).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chat() -> Chat {
        Chat {
            id: 456,
            chat_type: "private".to_string(),
        }
    }

    #[test]
    fn test_from_text_classifies_shapes() {
        assert_eq!(EventKind::from_text(None), EventKind::Other);
        assert_eq!(EventKind::from_text(Some("")), EventKind::Other);
        assert_eq!(
            EventKind::from_text(Some("hello world")),
            EventKind::Text("hello world".to_string())
        );
        match EventKind::from_text(Some("/help")) {
            EventKind::Command(cmd) => assert_eq!(cmd.name, "help"),
            other => panic!("expected command, got {:?}", other),
        }
    }

    #[test]
    fn test_new_keeps_raw_text() {
        let event = InboundEvent::new("1", None, chat(), Some("/start@bot hi".to_string()));
        assert_eq!(event.text(), Some("/start@bot hi"));
        assert!(matches!(event.kind, EventKind::Command(_)));
        assert_eq!(event.sender_id(), 0);
    }
}
