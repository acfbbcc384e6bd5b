//! Catch-all text handler: replies with the received text.

use async_trait::async_trait;
use echobot_core::{EventKind, Handler, HandlerError, InboundEvent, OutboundResponse};
use tracing::info;

/// Label placed before the echoed text.
pub const ECHO_PREFIX: &str = "You said: ";

#[derive(Clone, Default)]
pub struct EchoHandler;

impl EchoHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Handler for EchoHandler {
    async fn handle(&self, event: &InboundEvent) -> Result<OutboundResponse, HandlerError> {
        let EventKind::Text(text) = &event.kind else {
            return Err(HandlerError::NoText);
        };
        info!(
            user_id = event.sender_id(),
            username = %event
                .sender
                .as_ref()
                .and_then(|s| s.username.as_deref())
                .unwrap_or("unknown"),
            message_content = %text,
            "Received message"
        );
        Ok(OutboundResponse::plain(event, format!("{}{}", ECHO_PREFIX, text)))
    }
}
