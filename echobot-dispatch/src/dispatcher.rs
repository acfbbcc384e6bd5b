//! Event classification and per-event dispatch.

use std::any::Any;
use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use echobot_core::{
    Bot, BotError, ErrorReporter, EventKind, Handler, HandlerError, InboundEvent,
    OutboundResponse,
};
use futures::FutureExt;
use tracing::{debug, info, instrument, warn};

/// Which handler an event goes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// A registered command, by name.
    Command(String),
    /// Free text for the text handler.
    Text,
    /// No handler applies; nothing is sent.
    Ignored,
}

/// Result of dispatching one event. Dispatch itself never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Sent,
    Ignored,
    HandlerFailed,
    DeliveryFailed,
}

/// Routes events to handlers: commands by exact name, other text to the text handler.
///
/// Register everything before the transport starts delivering events; dispatch takes `&self`
/// and keeps no state between events.
pub struct Dispatcher {
    commands: HashMap<String, Arc<dyn Handler>>,
    text_handler: Option<Arc<dyn Handler>>,
    reporter: Arc<dyn ErrorReporter>,
    bot_username: Option<String>,
}

impl Dispatcher {
    /// Creates a dispatcher with no handlers that reports failures to `reporter`.
    pub fn new(reporter: Arc<dyn ErrorReporter>) -> Self {
        Self {
            commands: HashMap::new(),
            text_handler: None,
            reporter,
            bot_username: None,
        }
    }

    /// Registers `handler` for `/name`. A leading `/` in `name` is ignored. Registering the same
    /// name again replaces the earlier handler.
    pub fn add_command(mut self, name: &str, handler: Arc<dyn Handler>) -> Self {
        let name = name.trim_start_matches('/').to_string();
        if self.commands.insert(name.clone(), handler).is_some() {
            warn!(command = %name, "Command registered twice, keeping the latest handler");
        }
        self
    }

    /// Sets the handler for text that is not a command.
    pub fn set_text_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.text_handler = Some(handler);
        self
    }

    /// Bot's own username; commands addressed to another bot (`/start@other_bot`) are ignored.
    pub fn with_bot_username(mut self, username: impl Into<String>) -> Self {
        self.bot_username = Some(username.into());
        self
    }

    pub fn bot_username(&self) -> Option<&str> {
        self.bot_username.as_deref()
    }

    /// Registered command names, sorted.
    pub fn command_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn reporter(&self) -> &Arc<dyn ErrorReporter> {
        &self.reporter
    }

    pub fn classify(&self, event: &InboundEvent) -> Classification {
        match &event.kind {
            EventKind::Command(command) => {
                let addressed = self
                    .bot_username
                    .as_deref()
                    .map_or(true, |me| command.is_addressed_to(me));
                if addressed && self.commands.contains_key(&command.name) {
                    Classification::Command(command.name.clone())
                } else {
                    Classification::Ignored
                }
            }
            EventKind::Text(_) if self.text_handler.is_some() => Classification::Text,
            EventKind::Text(_) | EventKind::Other => Classification::Ignored,
        }
    }

    /// Classifies `event`, runs its handler and sends the response through `bot`.
    ///
    /// Handler errors, handler panics and delivery errors go to the reporter; none is retried.
    #[instrument(skip(self, bot, event), fields(event_id = %event.id, chat_id = event.chat.id))]
    pub async fn dispatch(&self, bot: &dyn Bot, event: &InboundEvent) -> DispatchOutcome {
        let classification = self.classify(event);
        let handler = match &classification {
            Classification::Command(name) => self.commands.get(name),
            Classification::Text => self.text_handler.as_ref(),
            Classification::Ignored => None,
        };
        let Some(handler) = handler else {
            debug!(user_id = event.sender_id(), "step: event ignored");
            return DispatchOutcome::Ignored;
        };

        info!(
            user_id = event.sender_id(),
            classification = ?classification,
            "step: handler processing"
        );

        let response = match run_handler(handler.as_ref(), event).await {
            Ok(response) => response,
            Err(e) => {
                self.reporter.report(Some(event), &BotError::Handler(e));
                return DispatchOutcome::HandlerFailed;
            }
        };

        if let Err(e) = bot.send(&response).await {
            self.reporter.report(Some(event), &e);
            return DispatchOutcome::DeliveryFailed;
        }

        info!(
            user_id = event.sender_id(),
            reply_len = response.text().len(),
            "step: response sent"
        );
        DispatchOutcome::Sent
    }
}

/// Runs the handler with panics turned into [`HandlerError::Panicked`], and checks that the
/// response stays in the event's chat.
async fn run_handler(
    handler: &dyn Handler,
    event: &InboundEvent,
) -> Result<OutboundResponse, HandlerError> {
    let response = AssertUnwindSafe(handler.handle(event))
        .catch_unwind()
        .await
        .map_err(|payload| HandlerError::Panicked(panic_message(payload.as_ref())))??;

    if response.chat().id != event.chat.id {
        return Err(HandlerError::ConversationMismatch {
            expected: event.chat.id,
            actual: response.chat().id,
        });
    }
    Ok(response)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
