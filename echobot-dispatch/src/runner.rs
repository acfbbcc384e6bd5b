//! Event loop: pulls events from an [`EventSource`] and dispatches each one in its own task.

use std::sync::Arc;

use async_trait::async_trait;
use echobot_core::{Bot, BotError, InboundEvent};
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinSet};
use tracing::{info, instrument};

use crate::dispatcher::{DispatchOutcome, Dispatcher};

/// Inbound side of the transport.
#[async_trait]
pub trait EventSource: Send {
    /// Next event, or `None` once the transport has shut down. Must be cancel-safe: [`run`]
    /// may drop a pending call and call again.
    async fn next_event(&mut self) -> Option<InboundEvent>;
}

/// [`EventSource`] over an mpsc channel; ends when every sender is dropped.
pub struct ChannelEventSource {
    rx: mpsc::Receiver<InboundEvent>,
}

impl ChannelEventSource {
    pub fn new(rx: mpsc::Receiver<InboundEvent>) -> Self {
        Self { rx }
    }

    /// Creates a bounded channel and returns its sender with the source.
    pub fn channel(capacity: usize) -> (mpsc::Sender<InboundEvent>, Self) {
        let (tx, rx) = mpsc::channel(capacity);
        (tx, Self::new(rx))
    }
}

#[async_trait]
impl EventSource for ChannelEventSource {
    async fn next_event(&mut self) -> Option<InboundEvent> {
        self.rx.recv().await
    }
}

/// Per-outcome counters for one [`run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub received: usize,
    pub sent: usize,
    pub ignored: usize,
    pub handler_failed: usize,
    pub delivery_failed: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: DispatchOutcome) {
        match outcome {
            DispatchOutcome::Sent => self.sent += 1,
            DispatchOutcome::Ignored => self.ignored += 1,
            DispatchOutcome::HandlerFailed => self.handler_failed += 1,
            DispatchOutcome::DeliveryFailed => self.delivery_failed += 1,
        }
    }
}

/// Dispatches every event from `source` until it ends, then waits for in-flight dispatches.
///
/// Events are processed concurrently with no ordering guarantee. A dispatch task that fails to
/// join is reported with no event attached and counted as a handler failure.
#[instrument(skip(source, bot, dispatcher))]
pub async fn run<S>(mut source: S, bot: Arc<dyn Bot>, dispatcher: Arc<Dispatcher>) -> RunSummary
where
    S: EventSource,
{
    let mut summary = RunSummary::default();
    let mut in_flight: JoinSet<DispatchOutcome> = JoinSet::new();

    info!(commands = ?dispatcher.command_names(), "Dispatch loop started");

    loop {
        tokio::select! {
            event = source.next_event() => {
                let Some(event) = event else { break };
                summary.received += 1;
                let bot = bot.clone();
                let dispatcher = dispatcher.clone();
                in_flight.spawn(async move { dispatcher.dispatch(bot.as_ref(), &event).await });
            }
            Some(joined) = in_flight.join_next(), if !in_flight.is_empty() => {
                record_joined(&mut summary, &dispatcher, joined);
            }
        }
    }

    info!(in_flight = in_flight.len(), "Event source closed, draining in-flight events");
    while let Some(joined) = in_flight.join_next().await {
        record_joined(&mut summary, &dispatcher, joined);
    }

    info!(summary = ?summary, "Dispatch loop finished");
    summary
}

fn record_joined(
    summary: &mut RunSummary,
    dispatcher: &Dispatcher,
    joined: Result<DispatchOutcome, JoinError>,
) {
    match joined {
        Ok(outcome) => summary.record(outcome),
        Err(e) => {
            dispatcher
                .reporter()
                .report(None, &BotError::Task(e.to_string()));
            summary.handler_failed += 1;
        }
    }
}
