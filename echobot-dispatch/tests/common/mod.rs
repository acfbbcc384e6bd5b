//! Fakes shared by the dispatch integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use echobot_core::{
    Bot, BotError, Chat, ErrorReporter, Handler, HandlerError, InboundEvent, OutboundResponse,
    Result, Sender,
};

/// Bot that records every response it is asked to send. Fails sends whose text contains
/// `fail_on` when set.
#[derive(Default)]
pub struct RecordingBot {
    pub sent: Mutex<Vec<OutboundResponse>>,
    pub fail_on: Option<String>,
}

impl RecordingBot {
    pub fn failing_on(text: &str) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_on: Some(text.to_string()),
        }
    }

    pub fn sent(&self) -> Vec<OutboundResponse> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send(&self, response: &OutboundResponse) -> Result<()> {
        if let Some(fail_on) = &self.fail_on {
            if response.text().contains(fail_on.as_str()) {
                return Err(BotError::Delivery("429 Too Many Requests".to_string()));
            }
        }
        self.sent.lock().unwrap().push(response.clone());
        Ok(())
    }
}

/// One recorded report: event id (if any) and error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub event_id: Option<String>,
    pub error: String,
}

#[derive(Default)]
pub struct RecordingReporter {
    pub reports: Mutex<Vec<Report>>,
}

impl RecordingReporter {
    pub fn reports(&self) -> Vec<Report> {
        self.reports.lock().unwrap().clone()
    }
}

impl ErrorReporter for RecordingReporter {
    fn report(&self, event: Option<&InboundEvent>, error: &BotError) {
        self.reports.lock().unwrap().push(Report {
            event_id: event.map(|e| e.id.clone()),
            error: error.to_string(),
        });
    }
}

/// Handler that counts calls and returns `HandlerError::NoText`.
#[derive(Default)]
pub struct FailingHandler {
    pub calls: AtomicUsize,
}

#[async_trait]
impl Handler for FailingHandler {
    async fn handle(
        &self,
        _event: &InboundEvent,
    ) -> std::result::Result<OutboundResponse, HandlerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(HandlerError::NoText)
    }
}

/// Handler that panics.
pub struct PanickingHandler;

#[async_trait]
impl Handler for PanickingHandler {
    async fn handle(
        &self,
        _event: &InboundEvent,
    ) -> std::result::Result<OutboundResponse, HandlerError> {
        panic!("handler exploded");
    }
}

/// Handler that counts calls and replies "counted".
#[derive(Default)]
pub struct CountingHandler {
    pub calls: AtomicUsize,
}

impl CountingHandler {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Handler for CountingHandler {
    async fn handle(
        &self,
        event: &InboundEvent,
    ) -> std::result::Result<OutboundResponse, HandlerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(OutboundResponse::plain(event, "counted"))
    }
}

/// Handler that replies into a fixed foreign chat (a buggy handler).
pub struct WrongChatHandler;

#[async_trait]
impl Handler for WrongChatHandler {
    async fn handle(
        &self,
        event: &InboundEvent,
    ) -> std::result::Result<OutboundResponse, HandlerError> {
        let mut foreign = event.clone();
        foreign.chat.id = event.chat.id + 1;
        Ok(OutboundResponse::plain(&foreign, "leaked"))
    }
}

pub fn create_test_event(id: &str, chat_id: i64, text: Option<&str>) -> InboundEvent {
    InboundEvent::new(
        id,
        Some(Sender {
            id: 123,
            username: Some("test_user".to_string()),
            first_name: "Ann & Bob".to_string(),
            last_name: None,
        }),
        Chat {
            id: chat_id,
            chat_type: "private".to_string(),
        },
        text.map(str::to_string),
    )
}

pub fn shared<T>(value: T) -> Arc<T> {
    Arc::new(value)
}
