//! Daily chat-API account cycler
//!
//! Cycles a pool of session tokens through the remote chat service once
//! a day: checks each account's reward balance, reuses or creates a
//! conversation thread, and submits prompts from the catalog at a fixed
//! cadence. Accounts run strictly one after another; the only pacing is
//! the per-message sleep and the daily wait between passes.

mod config;
mod error;
mod scheduler;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::scheduler::Scheduler;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing with LOG_LEVEL / RUST_LOG support
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_env("LOG_LEVEL")
                .or_else(|_| EnvFilter::try_from_default_env())
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "starting chat-cycler");

    // CLI: simple --config flag parsing
    let args: Vec<String> = std::env::args().collect();
    let cli_config_path = args
        .iter()
        .position(|a| a == "--config")
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str());

    let config_path = Config::resolve_path(cli_config_path);
    info!(path = %config_path.display(), "loading configuration");

    let config = Config::load(&config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;

    info!(
        base_url = %config.api.base_url,
        token_file = %config.accounts.token_file.display(),
        chat_interval_secs = config.runner.chat_interval_secs,
        daily_wait_secs = config.runner.daily_wait_secs,
        prompts = config.runner.prompts.len(),
        "configuration loaded"
    );

    // Runs until killed; returns only on the fatal no-credentials case.
    Scheduler::new(config)
        .run_forever()
        .await
        .context("daily pass failed")?;

    Ok(())
}
