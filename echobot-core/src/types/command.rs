//! Bot command parsing (`/name[@target] [args]`).

use serde::{Deserialize, Serialize};

/// Prefix that marks a Telegram bot command.
pub const COMMAND_PREFIX: char = '/';

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandInvocation {
    /// Command name without prefix, case preserved.
    pub name: String,
    /// Bot username after `@`, if the command was addressed to a specific bot.
    pub target: Option<String>,
    /// Remainder after the command token, trimmed. Empty when absent.
    pub args: String,
}

impl CommandInvocation {
    /// Parses `text` as a command. Returns `None` when it does not start with one, in which case
    /// the caller treats it as plain text.
    ///
    /// The command token ends at the first character outside `[A-Za-z0-9_]`, as Telegram's
    /// `bot_command` entity does: `/help.` is `help` with args `.`, and `/start@` is `start` with
    /// args `@`.
    pub fn parse(text: &str) -> Option<Self> {
        let rest = text.strip_prefix(COMMAND_PREFIX)?;
        let (name, rest) = split_word(rest);
        if name.is_empty() {
            return None;
        }

        let (target, rest) = match rest.strip_prefix('@').map(split_word) {
            Some((target, after)) if !target.is_empty() => (Some(target), after),
            _ => (None, rest),
        };

        Some(Self {
            name: name.to_string(),
            target: target.map(str::to_string),
            args: rest.trim().to_string(),
        })
    }

    /// True when the command carries no `@target` or the target is `bot_username`
    /// (ASCII case-insensitive, leading `@` ignored).
    pub fn is_addressed_to(&self, bot_username: &str) -> bool {
        match &self.target {
            None => true,
            Some(target) => target.eq_ignore_ascii_case(bot_username.trim_start_matches('@')),
        }
    }
}

/// Splits off the leading run of `[A-Za-z0-9_]`.
fn split_word(text: &str) -> (&str, &str) {
    let end = text
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(text.len());
    text.split_at(end)
}
