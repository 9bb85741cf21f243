//! Mobot - Main Entry Point
//!
//! A Telegram bot that answers review pre-moderation commands with
//! templated replies.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

use mobot::commands::Router;
use mobot::config::{BotSettings, TelegramConfig};
use mobot::telegram::{BotRunner, TelegramBot};

/// Telegram bot for review pre-moderation.
#[derive(Parser, Debug)]
#[command(name = "mobot")]
#[command(about = "Answer review pre-moderation commands on Telegram")]
#[command(version)]
struct Args {
    /// Path to the .env file for environment variables.
    #[arg(long, default_value = ".env")]
    env_file: String,

    /// Log level (trace, debug, info, warn, error). Overrides the settings default.
    #[arg(short, long)]
    log_level: Option<String>,

    /// File that receives a copy of the log. Overrides `LOG_FILE`.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load environment variables before anything reads them
    let env_loaded = dotenvy::from_filename(&args.env_file);

    let settings = BotSettings::from_env_with_defaults().context("Failed to load bot settings")?;

    let log_level = args.log_level.as_deref().unwrap_or(&settings.log_level);
    let log_file = args.log_file.as_deref().unwrap_or(&settings.log_file);
    init_logging(log_level, log_file)?;

    if let Err(e) = env_loaded {
        debug!("Could not load .env file ({}): {}", args.env_file, e);
    }

    let tg_config = TelegramConfig::from_env()
        .context("Failed to load Telegram configuration from environment")?;

    let bot = TelegramBot::new(&tg_config);

    let username = bot.me().await.context("Failed to connect to Telegram")?;
    info!(
        "Authorized as @{}",
        username.as_deref().unwrap_or("<no username>")
    );

    bot.register_commands()
        .await
        .context("Failed to register bot commands")?;

    let router = Router::standard();
    debug!("Dispatch table has {} routes", router.len());

    let mut runner = BotRunner::new(bot, router, settings.poll_timeout());

    info!("Bot is running. Use Ctrl+C to stop.");

    tokio::select! {
        result = runner.run() => {
            result.context("Polling stopped")?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down...");
        }
    }

    Ok(())
}

/// Initializes the logging subsystem.
///
/// Every event goes to stdout and is appended to `log_file`.
fn init_logging(level: &str, log_file: &Path) -> Result<()> {
    if let Some(dir) = log_file.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("Failed to open log file {}", log_file.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(false)
        .with_writer(io::stdout.and(Arc::new(file)))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {e}"))?;

    Ok(())
}
