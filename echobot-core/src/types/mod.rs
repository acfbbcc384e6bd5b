//! Core types: sender, chat, inbound event, outbound response, and the Handler trait.
//!
//! One file per main type, mirroring the event lifecycle: the transport builds an
//! [`InboundEvent`], a [`Handler`] turns it into an [`OutboundResponse`].

mod chat;
mod command;
mod event;
mod handler;
mod response;
mod sender;

pub use chat::Chat;
pub use command::CommandInvocation;
pub use event::{EventKind, InboundEvent};
pub use handler::{Handler, ToInboundEvent, ToSender};
pub use response::{MarkupMode, OutboundResponse};
pub use sender::Sender;
