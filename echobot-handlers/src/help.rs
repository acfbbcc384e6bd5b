//! `/help`: fixed usage text.

use async_trait::async_trait;
use echobot_core::{Handler, HandlerError, InboundEvent, OutboundResponse};

pub const HELP_TEXT: &str = "Send me any message, and I will echo it back to you!";

#[derive(Clone, Default)]
pub struct HelpHandler;

impl HelpHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Handler for HelpHandler {
    async fn handle(&self, event: &InboundEvent) -> Result<OutboundResponse, HandlerError> {
        Ok(OutboundResponse::plain(event, HELP_TEXT))
    }
}
