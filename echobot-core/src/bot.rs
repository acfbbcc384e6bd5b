//! Bot abstraction for delivering responses.
//!
//! [`Bot`] is transport-agnostic; echobot-telegram implements it via teloxide and tests substitute
//! recording fakes.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::OutboundResponse;

/// Outbound side of the transport.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends `response` into `response.chat()`. Failures are [`crate::BotError::Delivery`].
    async fn send(&self, response: &OutboundResponse) -> Result<()>;
}
