//! # Dispatch
//!
//! [`Dispatcher`] classifies each event (registered command, free text, or ignored), runs the
//! matching handler and delivers the response. Failures are handed to an
//! [`echobot_core::ErrorReporter`] and never escape one event. [`run`] drives a dispatcher from
//! any [`EventSource`], one task per event.

mod dispatcher;
mod runner;

pub use dispatcher::{Classification, DispatchOutcome, Dispatcher};
pub use runner::{run, ChannelEventSource, EventSource, RunSummary};
