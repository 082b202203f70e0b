//! In-memory content source for tests and offline runs.
//!
//! Returns canned items per subreddit and counts every call.

use crate::domain::{ContentItem, DomainError, Listing};
use crate::ports::ContentSourcePort;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Canned listings keyed by subreddit. The same items are returned for every listing.
#[derive(Default)]
pub struct MockSource {
    items: HashMap<String, Vec<ContentItem>>,
    failing: HashSet<String>,
    calls: AtomicUsize,
    requested: Mutex<Vec<(String, Listing)>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `items` for `source`.
    pub fn with_items(mut self, source: &str, items: Vec<ContentItem>) -> Self {
        self.items.insert(source.to_string(), items);
        self
    }

    /// Make every query for `source` fail.
    pub fn with_failure(mut self, source: &str) -> Self {
        self.failing.insert(source.to_string());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Every (source, listing) pair queried so far, in order.
    pub fn requested(&self) -> Vec<(String, Listing)> {
        self.requested
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl ContentSourcePort for MockSource {
    async fn fetch_listing(
        &self,
        source: &str,
        listing: Listing,
    ) -> Result<Vec<ContentItem>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut requested) = self.requested.lock() {
            requested.push((source.to_string(), listing));
        }
        if self.failing.contains(source) {
            return Err(DomainError::collection(source, listing, "[MOCK] unreachable"));
        }
        Ok(self.items.get(source).cloned().unwrap_or_default())
    }
}
