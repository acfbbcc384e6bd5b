//! Handler trait and transport conversion traits.

use async_trait::async_trait;

use super::{event::InboundEvent, response::OutboundResponse, sender::Sender};
use crate::error::HandlerError;

/// Converts a transport-specific user type to core [`Sender`].
pub trait ToSender: Send + Sync {
    fn to_sender(&self) -> Sender;
}

/// Converts a transport-specific message type to core [`InboundEvent`].
pub trait ToInboundEvent: Send + Sync {
    fn to_event(&self) -> InboundEvent;
}

/// Builds the response for one event. Implementations hold no per-event state.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, event: &InboundEvent) -> Result<OutboundResponse, HandlerError>;
}
