//! # echobot-core
//!
//! Core types and traits for the echo bot: [`InboundEvent`], [`OutboundResponse`], [`Handler`],
//! [`Bot`], [`ErrorReporter`], the error taxonomy and tracing initialization.
//! Transport-agnostic; used by echobot-handlers, echobot-dispatch and echobot-telegram.

pub mod bot;
pub mod error;
pub mod logger;
pub mod reporter;
pub mod types;

pub use bot::Bot;
pub use error::{BotError, ConfigError, HandlerError, Result};
pub use logger::{init_tracing, resolve_log_file, DEFAULT_LOG_FILE};
pub use reporter::{ErrorReporter, TracingErrorReporter};
pub use types::{
    Chat, CommandInvocation, EventKind, Handler, InboundEvent, MarkupMode, OutboundResponse,
    Sender, ToInboundEvent, ToSender,
};
