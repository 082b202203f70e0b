//! Reddit gateway. Implements ContentSourcePort over the public `.json` listing endpoints.
//!
//! No authentication: listings are read anonymously with a descriptive User-Agent.

use super::mapper::{ListingResponse, listing_to_domain};
use crate::domain::{ContentItem, DomainError, Listing};
use crate::ports::ContentSourcePort;
use reqwest::Client;
use reqwest::header::USER_AGENT;
use std::time::Duration;
use tracing::{debug, info};

/// Anonymous Reddit listing client.
pub struct RedditGateway {
    client: Client,
    base_url: String,
    user_agent: String,
    body_max_chars: usize,
}

impl RedditGateway {
    /// Create a new gateway.
    ///
    /// # Arguments
    /// * `base_url` - e.g. "https://www.reddit.com" (no trailing slash needed)
    /// * `user_agent` - descriptive User-Agent; Reddit throttles generic ones
    /// * `timeout` - per-request timeout
    /// * `body_max_chars` - self-text is truncated to this many characters
    pub fn new(
        base_url: impl Into<String>,
        user_agent: impl Into<String>,
        timeout: Duration,
        body_max_chars: usize,
    ) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Config(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            user_agent: user_agent.into(),
            body_max_chars,
        })
    }

    fn listing_url(&self, source: &str, listing: &Listing) -> String {
        format!("{}/r/{}/{}.json", self.base_url, source, listing.segment())
    }
}

#[async_trait::async_trait]
impl ContentSourcePort for RedditGateway {
    async fn fetch_listing(
        &self,
        source: &str,
        listing: Listing,
    ) -> Result<Vec<ContentItem>, DomainError> {
        let url = self.listing_url(source, &listing);
        debug!(url = %url, listing = %listing, "fetching listing");

        let response = self
            .client
            .get(&url)
            .query(&listing.query())
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| {
                DomainError::collection(source, listing, format!("request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::collection(
                source,
                listing,
                format!("HTTP {}", status),
            ));
        }

        let body: ListingResponse = response.json().await.map_err(|e| {
            DomainError::collection(source, listing, format!("invalid listing JSON: {}", e))
        })?;

        let items = listing_to_domain(body, source, self.body_max_chars);
        info!(
            subreddit = source,
            listing = %listing,
            count = items.len(),
            "fetched listing"
        );
        Ok(items)
    }
}
