//! # Handlers for the echo bot
//!
//! [`StartHandler`] greets the sender, [`HelpHandler`] prints usage, [`EchoHandler`] repeats text.
//! Each one is pure given the event (apart from logging) and never touches the transport.

mod echo;
mod help;
mod markup;
mod start;

pub use echo::{EchoHandler, ECHO_PREFIX};
pub use help::{HelpHandler, HELP_TEXT};
pub use markup::{escape_html, mention_html};
pub use start::StartHandler;
