//! Startup and wiring tests for the echo bot binary crate.

use std::env;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use echobot::{build_dispatcher, run_bot};
use echobot_core::{
    Bot, BotError, Chat, ConfigError, ErrorReporter, InboundEvent, OutboundResponse, Result,
    Sender,
};
use echobot_dispatch::DispatchOutcome;
use mockito::Matcher;
use serial_test::serial;

#[derive(Default)]
struct RecordingBot {
    sent: Mutex<Vec<OutboundResponse>>,
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send(&self, response: &OutboundResponse) -> Result<()> {
        self.sent.lock().unwrap().push(response.clone());
        Ok(())
    }
}

#[derive(Default)]
struct CountingReporter {
    count: Mutex<usize>,
}

impl ErrorReporter for CountingReporter {
    fn report(&self, _event: Option<&InboundEvent>, _error: &BotError) {
        *self.count.lock().unwrap() += 1;
    }
}

fn event(text: Option<&str>, first_name: &str) -> InboundEvent {
    InboundEvent::new(
        "1",
        Some(Sender {
            id: 99,
            username: Some("ann".to_string()),
            first_name: first_name.to_string(),
            last_name: None,
        }),
        Chat {
            id: 5,
            chat_type: "private".to_string(),
        },
        text.map(str::to_string),
    )
}

/// **Test: Missing token fails with MissingToken and makes no Bot API request.**
///
/// **Setup:** BOT_TOKEN unset; TELEGRAM_API_URL points at a mock server that expects zero requests.
/// **Action:** `run_bot(None)`.
/// **Expected:** Err downcasts to ConfigError::MissingToken; the mock server saw no traffic.
#[tokio::test]
#[serial]
async fn test_missing_token_never_starts_transport() {
    let mut server = mockito::Server::new_async().await;
    let any_get = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let any_post = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    env::remove_var("BOT_TOKEN");
    env::remove_var("TELOXIDE_API_URL");
    env::set_var("TELEGRAM_API_URL", server.url());

    let err = run_bot(None).await.unwrap_err();

    assert_eq!(
        err.downcast_ref::<ConfigError>(),
        Some(&ConfigError::MissingToken)
    );
    any_get.assert_async().await;
    any_post.assert_async().await;

    env::remove_var("TELEGRAM_API_URL");
}

/// **Test: Blank --token is rejected the same way as a missing one.**
#[tokio::test]
#[serial]
async fn test_blank_token_override_is_missing_token() {
    env::remove_var("BOT_TOKEN");

    let err = run_bot(Some("   ".to_string())).await.unwrap_err();

    assert_eq!(
        err.downcast_ref::<ConfigError>(),
        Some(&ConfigError::MissingToken)
    );
}

/// **Test: The wired dispatcher answers /start, /help and text, and ignores the rest.**
///
/// **Setup:** `build_dispatcher` with a counting reporter and a recording bot.
/// **Action:** Dispatch /start (sender "Ann & Bob"), /help, "hello world", a no-text event, /settings.
/// **Expected:** Three replies in order with the expected texts; two ignored; no reports.
#[tokio::test]
async fn test_wired_dispatcher_end_to_end() {
    let reporter = Arc::new(CountingReporter::default());
    let dispatcher = build_dispatcher(reporter.clone());
    let bot = RecordingBot::default();

    assert_eq!(dispatcher.command_names(), vec!["help", "start"]);

    let outcomes = [
        dispatcher.dispatch(&bot, &event(Some("/start"), "Ann & Bob")).await,
        dispatcher.dispatch(&bot, &event(Some("/help"), "Ann")).await,
        dispatcher.dispatch(&bot, &event(Some("hello world"), "Ann")).await,
        dispatcher.dispatch(&bot, &event(None, "Ann")).await,
        dispatcher.dispatch(&bot, &event(Some("/settings"), "Ann")).await,
    ];
    assert_eq!(
        outcomes,
        [
            DispatchOutcome::Sent,
            DispatchOutcome::Sent,
            DispatchOutcome::Sent,
            DispatchOutcome::Ignored,
            DispatchOutcome::Ignored,
        ]
    );

    let sent = bot.sent.lock().unwrap();
    assert_eq!(sent.len(), 3);
    assert!(sent[0].text().contains("Ann &amp; Bob"));
    assert!(sent[0].text().starts_with("Hi "));
    assert_eq!(sent[1].text(), "Send me any message, and I will echo it back to you!");
    assert_eq!(sent[2].text(), "You said: hello world");
    assert!(sent.iter().all(|r| r.chat().id == 5));
    assert_eq!(*reporter.count.lock().unwrap(), 0);
}
