//! Composition root. Resolve credentials, build adapters, run the pipeline.
//!
//! The API key is checked before any adapter exists, so a missing key never costs a request.

use crate::adapters::ai::OpenAiAdapter;
use crate::adapters::persistence::SummaryFile;
use crate::adapters::reddit::RedditGateway;
use crate::adapters::ui::{ConsoleSink, console, progress};
use crate::domain::{DomainError, Instruction, RunOutcome, SourceSpec, default_sources};
use crate::ports::{ContentSourcePort, SummarizerPort, SummarySinkPort};
use crate::shared::config::AppConfig;
use crate::usecases::{CollectSettings, CollectorService, RoundupService, SummarizeService};
use std::sync::Arc;
use tracing::info;

/// Run one roundup against the hardcoded source list.
pub async fn run(cfg: &AppConfig) -> Result<RunOutcome, DomainError> {
    run_with_sources(cfg, &default_sources()).await
}

/// Run one roundup against `sources`.
pub async fn run_with_sources(
    cfg: &AppConfig,
    sources: &[SourceSpec],
) -> Result<RunOutcome, DomainError> {
    let api_key = cfg.require_ai_api_key()?;
    let window = cfg.top_window()?;
    let settings = CollectSettings {
        listings: cfg.listings()?,
        window,
        skip_failed_sources: cfg.skip_failed_sources(),
        rank_by_engagement: cfg.rank_by_engagement(),
        max_posts: cfg.max_posts_or_default(),
    };

    let reddit: Arc<dyn ContentSourcePort> = Arc::new(RedditGateway::new(
        cfg.reddit_base_url_or_default(),
        cfg.user_agent_or_default(),
        cfg.reddit_timeout(),
        cfg.body_max_chars_or_default(),
    )?);

    info!(
        model = %cfg.ai_model_or_default(),
        url = %cfg.ai_api_url_or_default(),
        "AI summarization enabled with OpenAI adapter"
    );
    let ai: Arc<dyn SummarizerPort> = Arc::new(OpenAiAdapter::new(
        cfg.ai_api_url_or_default(),
        api_key,
        cfg.ai_model_or_default(),
        cfg.ai_max_tokens_or_default(),
        cfg.ai_timeout(),
    )?);

    let output_path = cfg.output_path_or_default();
    let sinks: Vec<Arc<dyn SummarySinkPort>> = vec![
        Arc::new(ConsoleSink::new()),
        Arc::new(SummaryFile::new(&output_path)),
    ];

    let collector =
        CollectorService::new(reddit, settings).with_progress(progress::source_progress(sources.len()));
    let summarizer =
        SummarizeService::new(ai, Instruction::pop_culture_roundup(window), sinks);

    let mut service = RoundupService::new(collector, summarizer);
    if cfg.show_posts() {
        service = service.on_collected(console::print_posts);
    }

    let outcome = service.run(sources).await?;
    if let RunOutcome::Completed { .. } = outcome {
        info!(path = %output_path.display(), "roundup saved");
    }
    Ok(outcome)
}
