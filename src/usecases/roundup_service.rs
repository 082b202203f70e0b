//! The roundup pipeline: collect → aggregate → summarize.
//!
//! Each stage completes before the next starts. An empty collection stops the run
//! before the generation API is called.

use super::aggregator::aggregate;
use super::collector_service::CollectorService;
use super::summarize_service::SummarizeService;
use crate::domain::{ContentItem, DomainError, RunOutcome, SourceSpec};
use tracing::{info, warn};

/// Runs the three stages in order.
pub struct RoundupService {
    collector: CollectorService,
    summarizer: SummarizeService,
    on_collected: Option<Box<dyn Fn(&[ContentItem]) + Send + Sync>>,
}

impl RoundupService {
    pub fn new(collector: CollectorService, summarizer: SummarizeService) -> Self {
        Self {
            collector,
            summarizer,
            on_collected: None,
        }
    }

    /// Hook called with the collected posts before aggregation (e.g. to print them).
    pub fn on_collected(mut self, hook: impl Fn(&[ContentItem]) + Send + Sync + 'static) -> Self {
        self.on_collected = Some(Box::new(hook));
        self
    }

    pub async fn run(&self, sources: &[SourceSpec]) -> Result<RunOutcome, DomainError> {
        info!(sources = sources.len(), "collecting posts");
        let items = self.collector.collect(sources).await?;

        if items.is_empty() {
            warn!("no content found; skipping summarization");
            return Ok(RunOutcome::NoContent);
        }

        if let Some(hook) = &self.on_collected {
            hook(&items);
        }

        let aggregate = aggregate(&items);
        if aggregate.is_empty() {
            warn!("no content found; skipping summarization");
            return Ok(RunOutcome::NoContent);
        }
        info!(
            items = aggregate.item_count(),
            chars = aggregate.as_str().len(),
            "aggregated posts"
        );

        let summary = self.summarizer.summarize_and_emit(&aggregate).await?;

        Ok(RunOutcome::Completed {
            items: aggregate.item_count(),
            summary_len: summary.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAiAdapter;
    use crate::adapters::persistence::SummaryFile;
    use crate::adapters::reddit::MockSource;
    use crate::domain::{Instruction, Tier, TimeWindow};
    use crate::usecases::CollectSettings;
    use chrono::Utc;
    use std::path::Path;
    use std::sync::Arc;

    fn fresh(source: &str, title: &str, body: &str) -> ContentItem {
        let mut item = ContentItem::new(source, title, body);
        item.created_utc = Utc::now().timestamp() - 3600;
        item
    }

    fn sources() -> Vec<SourceSpec> {
        vec![
            SourceSpec::new("television", Tier::A, 25, 1.15),
            SourceSpec::new("Fauxmoi", Tier::C, 10, 0.70),
        ]
    }

    fn two_item_source() -> Arc<MockSource> {
        Arc::new(
            MockSource::new()
                .with_items(
                    "television",
                    vec![fresh("television", "Show X renewed", "Fans react positively")],
                )
                .with_items(
                    "Fauxmoi",
                    vec![fresh("Fauxmoi", "Celebrity Y statement", "Mixed reactions online")],
                ),
        )
    }

    fn service(
        source: Arc<MockSource>,
        ai: Arc<MockAiAdapter>,
        output: &Path,
    ) -> RoundupService {
        let settings = CollectSettings {
            rank_by_engagement: false,
            ..CollectSettings::default()
        };
        RoundupService::new(
            CollectorService::new(source, settings),
            SummarizeService::new(
                ai,
                Instruction::pop_culture_roundup(TimeWindow::Week),
                vec![Arc::new(SummaryFile::new(output))],
            ),
        )
    }

    #[tokio::test]
    async fn test_end_to_end_echo_written_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("pop_culture_roundup.txt");
        let ai = Arc::new(MockAiAdapter::echo());

        let outcome = service(two_item_source(), ai.clone(), &out)
            .run(&sources())
            .await
            .unwrap();

        assert_eq!(ai.calls(), 1);
        let written = std::fs::read_to_string(&out).unwrap();
        for needle in [
            "Show X renewed",
            "Fans react positively",
            "Celebrity Y statement",
            "Mixed reactions online",
        ] {
            assert!(written.contains(needle), "missing {needle}");
        }

        let items = vec![
            fresh("television", "Show X renewed", "Fans react positively"),
            fresh("Fauxmoi", "Celebrity Y statement", "Mixed reactions online"),
        ];
        let expected = MockAiAdapter::echo_text(
            &Instruction::pop_culture_roundup(TimeWindow::Week),
            &aggregate(&items),
        );
        assert_eq!(written, expected);
        assert_eq!(
            outcome,
            RunOutcome::Completed {
                items: 2,
                summary_len: expected.len()
            }
        );
    }

    #[tokio::test]
    async fn test_no_content_skips_summarizer_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("pop_culture_roundup.txt");
        let ai = Arc::new(MockAiAdapter::echo());

        let outcome = service(Arc::new(MockSource::new()), ai.clone(), &out)
            .run(&sources())
            .await
            .unwrap();

        assert_eq!(outcome, RunOutcome::NoContent);
        assert_eq!(ai.calls(), 0);
        assert!(!out.exists());
    }

    #[tokio::test]
    async fn test_summarizer_failure_leaves_file_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("pop_culture_roundup.txt");
        std::fs::write(&out, "last week's roundup").unwrap();
        let ai = Arc::new(MockAiAdapter::failing("503 upstream"));

        let err = service(two_item_source(), ai, &out)
            .run(&sources())
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Summarization(_)));
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "last week's roundup");
    }

    #[tokio::test]
    async fn test_collection_failure_never_reaches_summarizer() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("pop_culture_roundup.txt");
        let ai = Arc::new(MockAiAdapter::echo());
        let source = Arc::new(MockSource::new().with_failure("television"));

        let err = service(source, ai.clone(), &out)
            .run(&sources())
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Collection { .. }));
        assert_eq!(ai.calls(), 0);
        assert!(!out.exists());
    }

    #[tokio::test]
    async fn test_all_sources_failing_is_fatal_even_when_lenient() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("pop_culture_roundup.txt");
        std::fs::write(&out, "last week's roundup").unwrap();
        let ai = Arc::new(MockAiAdapter::echo());
        let source = Arc::new(
            MockSource::new()
                .with_failure("television")
                .with_failure("Fauxmoi"),
        );
        let settings = CollectSettings {
            skip_failed_sources: true,
            rank_by_engagement: false,
            ..CollectSettings::default()
        };
        let service = RoundupService::new(
            CollectorService::new(source, settings),
            SummarizeService::new(
                ai.clone(),
                Instruction::pop_culture_roundup(TimeWindow::Week),
                vec![Arc::new(SummaryFile::new(&out))],
            ),
        );

        let err = service.run(&sources()).await.unwrap_err();

        assert!(matches!(err, DomainError::Collection { .. }));
        assert_eq!(ai.calls(), 0);
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "last week's roundup");
    }

    #[tokio::test]
    async fn test_rerun_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("pop_culture_roundup.txt");

        service(two_item_source(), Arc::new(MockAiAdapter::echo()), &out)
            .run(&sources())
            .await
            .unwrap();
        let first = std::fs::read(&out).unwrap();

        service(two_item_source(), Arc::new(MockAiAdapter::echo()), &out)
            .run(&sources())
            .await
            .unwrap();
        let second = std::fs::read(&out).unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_on_collected_hook_sees_posts() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("pop_culture_roundup.txt");
        let seen = Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let seen_hook = seen.clone();

        service(two_item_source(), Arc::new(MockAiAdapter::fixed("ok")), &out)
            .on_collected(move |items| {
                seen_hook.store(items.len(), std::sync::atomic::Ordering::SeqCst);
            })
            .run(&sources())
            .await
            .unwrap();

        assert_eq!(seen.load(std::sync::atomic::Ordering::SeqCst), 2);
    }
}
