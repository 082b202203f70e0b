//! Summarization: one generation call, then hand the result to every sink in order.

use crate::domain::{AggregateText, DomainError, Instruction, Summary};
use crate::ports::{SummarizerPort, SummarySinkPort};
use std::sync::Arc;
use tracing::{info, warn};

/// Service for turning an aggregate into a published summary.
pub struct SummarizeService {
    ai: Arc<dyn SummarizerPort>,
    instruction: Instruction,
    sinks: Vec<Arc<dyn SummarySinkPort>>,
}

impl SummarizeService {
    /// # Arguments
    /// * `ai` - Summarizer implementation (OpenAI, Mock, etc.)
    /// * `instruction` - Fixed roundup instruction sent with every request
    /// * `sinks` - Destinations, emitted in order (console first, then file)
    pub fn new(
        ai: Arc<dyn SummarizerPort>,
        instruction: Instruction,
        sinks: Vec<Arc<dyn SummarySinkPort>>,
    ) -> Self {
        Self {
            ai,
            instruction,
            sinks,
        }
    }

    /// Summarize and emit. Sinks are only touched after the full response is received.
    pub async fn summarize_and_emit(
        &self,
        aggregate: &AggregateText,
    ) -> Result<Summary, DomainError> {
        if aggregate.is_empty() {
            warn!("refusing to summarize an empty aggregate");
            return Err(DomainError::Summarization(
                "aggregate is empty; nothing to summarize".to_string(),
            ));
        }

        let summary = self.ai.summarize(&self.instruction, aggregate).await?;

        for sink in &self.sinks {
            sink.emit(&summary).await?;
            info!(sink = %sink.name(), "summary emitted");
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAiAdapter;
    use crate::adapters::persistence::SummaryFile;
    use crate::domain::TimeWindow;

    #[tokio::test]
    async fn test_empty_aggregate_never_calls_ai() {
        let ai = Arc::new(MockAiAdapter::echo());
        let service = SummarizeService::new(
            ai.clone(),
            Instruction::pop_culture_roundup(TimeWindow::Week),
            vec![],
        );
        assert!(service.summarize_and_emit(&AggregateText::default()).await.is_err());
        assert_eq!(ai.calls(), 0);
    }

    #[tokio::test]
    async fn test_emits_to_every_sink() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        let service = SummarizeService::new(
            Arc::new(MockAiAdapter::fixed("the roundup")),
            Instruction::pop_culture_roundup(TimeWindow::Week),
            vec![Arc::new(SummaryFile::new(&a)), Arc::new(SummaryFile::new(&b))],
        );

        let summary = service
            .summarize_and_emit(&AggregateText::new("[1] r/movies".to_string(), 1))
            .await
            .unwrap();
        assert_eq!(summary.as_str(), "the roundup");
        assert_eq!(std::fs::read_to_string(a).unwrap(), "the roundup");
        assert_eq!(std::fs::read_to_string(b).unwrap(), "the roundup");
    }
}
