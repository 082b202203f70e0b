//! Mock AI adapter for testing without API calls.
//!
//! Echoes its input, returns a fixed text, or fails, and counts calls.

use crate::domain::{AggregateText, DomainError, Instruction, Summary};
use crate::ports::SummarizerPort;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::info;

/// What the mock returns.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// System prompt, blank line, user message.
    Echo,
    Fixed(String),
    Failing(String),
}

/// Mock AI adapter for testing.
///
/// Returns predetermined responses without making API calls.
pub struct MockAiAdapter {
    behavior: MockBehavior,
    calls: AtomicUsize,
}

impl MockAiAdapter {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn echo() -> Self {
        Self::new(MockBehavior::Echo)
    }

    pub fn fixed(text: impl Into<String>) -> Self {
        Self::new(MockBehavior::Fixed(text.into()))
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::new(MockBehavior::Failing(message.into()))
    }

    /// Number of `summarize` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// What `Echo` returns for the given input.
    pub fn echo_text(instruction: &Instruction, aggregate: &AggregateText) -> String {
        format!(
            "{}\n\n{}",
            instruction.system(),
            instruction.user_message(aggregate)
        )
    }
}

impl Default for MockAiAdapter {
    fn default() -> Self {
        Self::echo()
    }
}

#[async_trait::async_trait]
impl SummarizerPort for MockAiAdapter {
    async fn summarize(
        &self,
        instruction: &Instruction,
        aggregate: &AggregateText,
    ) -> Result<Summary, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        info!(
            items = aggregate.item_count(),
            "[MOCK] Simulating AI summarization"
        );

        match &self.behavior {
            MockBehavior::Echo => Ok(Summary::new(Self::echo_text(instruction, aggregate))),
            MockBehavior::Fixed(text) => Ok(Summary::new(text.clone())),
            MockBehavior::Failing(msg) => Err(DomainError::Summarization(msg.clone())),
        }
    }
}
