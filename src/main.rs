//! Wiring entry point: load .env and config, init logging, run one roundup.
//! No business logic here; the pipeline lives in `app` and the use cases.

use anyhow::Context;
use dotenv::dotenv;
use reddit_roundup::domain::RunOutcome;
use reddit_roundup::shared::config::AppConfig;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    // stdout is reserved for the summary
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    reddit_roundup::adapters::ui::init_ui();

    let cfg = AppConfig::load().context("failed to load configuration")?;

    match reddit_roundup::app::run(&cfg).await? {
        RunOutcome::Completed { items, summary_len } => {
            info!(items, summary_len, "roundup complete");
        }
        RunOutcome::NoContent => {
            warn!("no content found across all sources; nothing was summarized");
        }
    }

    Ok(())
}
