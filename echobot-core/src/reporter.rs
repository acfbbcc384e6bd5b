//! Terminal sink for per-event failures.

use std::error::Error as StdError;
use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::error;

use crate::error::BotError;
use crate::types::InboundEvent;

/// Records an event failure for the operator.
///
/// Called fire-and-forget by the dispatcher. Implementations must not panic or block.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, event: Option<&InboundEvent>, error: &BotError);
}

/// Reports through `tracing` at error level, with the event serialized as JSON and the error's
/// source chain.
#[derive(Debug, Clone, Default)]
pub struct TracingErrorReporter;

impl TracingErrorReporter {
    pub fn new() -> Self {
        Self
    }
}

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, event: Option<&InboundEvent>, error: &BotError) {
        let logged = catch_unwind(AssertUnwindSafe(|| log_report(event, error)));
        if !matches!(logged, Ok(Ok(()))) {
            // Last resort; must not fail.
            let event_id = event.map(|e| e.id.as_str()).unwrap_or("-");
            eprintln!("error reporter fallback: event={} error={}", event_id, error);
        }
    }
}

fn log_report(event: Option<&InboundEvent>, err: &BotError) -> serde_json::Result<()> {
    let chain = error_chain(err);
    match event {
        Some(event) => {
            let payload = serde_json::to_string(event)?;
            error!(
                event_id = %event.id,
                chat_id = event.chat.id,
                user_id = event.sender_id(),
                event = %payload,
                error = %err,
                caused_by = %chain,
                "Update caused error"
            );
        }
        None => {
            error!(error = %err, caused_by = %chain, "Error outside of an update");
        }
    }
    Ok(())
}

/// Joins `err.source()` messages with `": "`. Empty when there is no source.
pub fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut parts = Vec::new();
    let mut source = err.source();
    while let Some(cause) = source {
        parts.push(cause.to_string());
        source = cause.source();
    }
    parts.join(": ")
}
