//! Telegram HTML helpers.

use echobot_core::Sender;

/// Escapes untrusted text for Telegram's HTML parse mode (`& < > " ' /`).
pub fn escape_html(text: &str) -> String {
    html_escape::encode_safe(text).into_owned()
}

/// Inline mention of `sender` (`<a href="tg://user?id=..">name</a>`), name escaped.
pub fn mention_html(sender: &Sender) -> String {
    format!(
        "<a href=\"tg://user?id={}\">{}</a>",
        sender.id,
        escape_html(&sender.display_name())
    )
}
