//! Collection: query each source's listings in order and gather posts.
//!
//! - One request per (source, listing), strictly sequential
//! - Drops posts older than the window and ids already seen this run
//! - Keeps at most `cap` posts per source
//! - Optionally ranks by weighted engagement, then truncates to `max_posts`

use crate::domain::{ContentItem, DomainError, Listing, SourceSpec, TimeWindow};
use crate::ports::ContentSourcePort;
use chrono::Utc;
use indicatif::ProgressBar;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{info, warn};

/// Collection knobs. Built from `AppConfig` in the composition root.
#[derive(Debug, Clone)]
pub struct CollectSettings {
    /// Listings queried per source, in order.
    pub listings: Vec<Listing>,
    /// Posts older than this window are dropped.
    pub window: TimeWindow,
    /// Log and continue when a query fails, instead of aborting.
    pub skip_failed_sources: bool,
    pub rank_by_engagement: bool,
    pub max_posts: usize,
}

impl Default for CollectSettings {
    fn default() -> Self {
        Self {
            listings: vec![
                Listing::Top {
                    window: TimeWindow::Week,
                    limit: 100,
                },
                Listing::Hot { limit: 75 },
            ],
            window: TimeWindow::Week,
            skip_failed_sources: false,
            rank_by_engagement: true,
            max_posts: 200,
        }
    }
}

/// Collector service. Pulls listings through a ContentSourcePort.
pub struct CollectorService {
    source: Arc<dyn ContentSourcePort>,
    settings: CollectSettings,
    progress: ProgressBar,
}

impl CollectorService {
    pub fn new(source: Arc<dyn ContentSourcePort>, settings: CollectSettings) -> Self {
        Self {
            source,
            settings,
            progress: ProgressBar::hidden(),
        }
    }

    /// Show progress on the given bar (length is reset to the number of sources).
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// Collect from every source using the current time for the age cutoff.
    pub async fn collect(&self, sources: &[SourceSpec]) -> Result<Vec<ContentItem>, DomainError> {
        self.collect_at(sources, Utc::now().timestamp()).await
    }

    /// Collect with an explicit "now" (unix seconds).
    pub async fn collect_at(
        &self,
        sources: &[SourceSpec],
        now_utc: i64,
    ) -> Result<Vec<ContentItem>, DomainError> {
        let cutoff = self.settings.window.max_age_secs().map(|age| now_utc - age);
        let mut seen: HashSet<String> = HashSet::new();
        let mut collected: Vec<(ContentItem, f64)> = Vec::new();
        let mut queries = 0usize;
        let mut failed_queries = 0usize;
        let mut last_error: Option<DomainError> = None;

        self.progress.set_length(sources.len() as u64);

        for spec in sources {
            self.progress.set_message(format!("r/{}", spec.name));
            let mut from_source = 0usize;

            'listings: for listing in &self.settings.listings {
                queries += 1;
                let items = match self.source.fetch_listing(&spec.name, *listing).await {
                    Ok(items) => items,
                    Err(e) if self.settings.skip_failed_sources => {
                        warn!(subreddit = %spec.name, listing = %listing, error = %e, "skipping failed listing");
                        failed_queries += 1;
                        last_error = Some(e);
                        continue;
                    }
                    Err(e) => {
                        self.progress.abandon();
                        return Err(e);
                    }
                };

                for item in items {
                    if from_source >= spec.cap {
                        break 'listings;
                    }
                    if cutoff.is_some_and(|c| item.created_utc < c) {
                        continue;
                    }
                    if !seen.insert(item.id.clone()) {
                        continue;
                    }
                    collected.push((item, spec.weight));
                    from_source += 1;
                }
            }

            info!(subreddit = %spec.name, count = from_source, "collected source");
            self.progress.inc(1);
        }
        self.progress.finish_and_clear();

        // Every query failed: an outage, not a quiet week.
        if queries > 0 && failed_queries == queries {
            if let Some(e) = last_error {
                warn!(queries, "every listing query failed");
                return Err(e);
            }
        }

        if self.settings.rank_by_engagement {
            // Stable: ties keep fetch order.
            collected.sort_by(|(a, wa), (b, wb)| {
                let sa = a.engagement() as f64 * wa;
                let sb = b.engagement() as f64 * wb;
                sb.partial_cmp(&sa).unwrap_or(Ordering::Equal)
            });
        }

        let mut posts: Vec<ContentItem> = collected.into_iter().map(|(item, _)| item).collect();
        posts.truncate(self.settings.max_posts);

        info!(
            sources = sources.len(),
            failed = failed_queries,
            posts = posts.len(),
            "collection complete"
        );
        Ok(posts)
    }
}
