//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{AggregateText, ContentItem, DomainError, Instruction, Listing, Summary};

/// Content platform gateway. Fetch one ranked listing from one source.
#[async_trait::async_trait]
pub trait ContentSourcePort: Send + Sync {
    /// Fetch a listing from `source` (subreddit name, no `r/` prefix).
    ///
    /// An empty listing is `Ok(vec![])`. Transport failures and non-success statuses are
    /// `DomainError::Collection`.
    async fn fetch_listing(
        &self,
        source: &str,
        listing: Listing,
    ) -> Result<Vec<ContentItem>, DomainError>;
}

/// Text generation port. One request per call, one text response.
#[async_trait::async_trait]
pub trait SummarizerPort: Send + Sync {
    async fn summarize(
        &self,
        instruction: &Instruction,
        aggregate: &AggregateText,
    ) -> Result<Summary, DomainError>;
}

/// Destination for the finished summary (console, file).
#[async_trait::async_trait]
pub trait SummarySinkPort: Send + Sync {
    /// Write the summary. Must not leave partial output behind on failure.
    async fn emit(&self, summary: &Summary) -> Result<(), DomainError>;

    /// Short label for logs.
    fn name(&self) -> String;
}
