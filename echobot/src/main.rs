//! Binary for the echo bot.

use std::process::ExitCode;

use clap::Parser;
use echobot::{run_bot, Cli, Commands};
use echobot_core::init_tracing;
use echobot_telegram::TelegramConfig;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match init_tracing(TelegramConfig::log_file_from_env().as_deref()) {
        Ok(log_file) => info!(log_file = %log_file.display(), "Logging initialized"),
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            return ExitCode::FAILURE;
        }
    }

    let result = match cli.command {
        Commands::Run { token } => run_bot(token).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Bot exited with error");
            ExitCode::FAILURE
        }
    }
}
