//! `/start`: HTML greeting that mentions the sender.

use async_trait::async_trait;
use echobot_core::{Handler, HandlerError, InboundEvent, OutboundResponse};
use tracing::debug;

use crate::markup::mention_html;

#[derive(Clone, Default)]
pub struct StartHandler;

impl StartHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Handler for StartHandler {
    async fn handle(&self, event: &InboundEvent) -> Result<OutboundResponse, HandlerError> {
        let sender = event.sender.as_ref().ok_or(HandlerError::MissingSender)?;
        debug!(user_id = sender.id, chat_id = event.chat.id, "Greeting user");
        Ok(OutboundResponse::html(
            event,
            format!(
                "Hi {}! I'm your friendly echo bot. Send me a message!",
                mention_html(sender)
            ),
        ))
    }
}
