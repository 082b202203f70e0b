//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/JSON wire types here; adapters map into these.

use std::fmt;
use std::str::FromStr;

/// A single post pulled from a subreddit listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    /// Self-text of the post. Empty for link posts.
    pub body: String,
    /// Subreddit name without the `r/` prefix.
    pub source: String,
    pub score: i64,
    pub num_comments: i64,
    pub created_utc: i64,
}

impl ContentItem {
    /// Item with zeroed engagement, mostly for fixtures. The id is derived from source + title.
    pub fn new(
        source: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        let source = source.into();
        let title = title.into();
        Self {
            id: format!("{}:{}", source, title),
            title,
            body: body.into(),
            source,
            score: 0,
            num_comments: 0,
            created_utc: 0,
        }
    }

    /// Raw engagement: `score + 2 * num_comments`.
    pub fn engagement(&self) -> i64 {
        self.score
            .saturating_add(self.num_comments.saturating_mul(2))
    }
}

/// Time window for the `top` listing (Reddit's `t` parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeWindow {
    Hour,
    Day,
    #[default]
    Week,
    Month,
    Year,
    All,
}

impl TimeWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeWindow::Hour => "hour",
            TimeWindow::Day => "day",
            TimeWindow::Week => "week",
            TimeWindow::Month => "month",
            TimeWindow::Year => "year",
            TimeWindow::All => "all",
        }
    }

    /// Maximum post age in seconds for this window. `None` for `All`.
    pub fn max_age_secs(&self) -> Option<i64> {
        const DAY: i64 = 24 * 60 * 60;
        match self {
            TimeWindow::Hour => Some(60 * 60),
            TimeWindow::Day => Some(DAY),
            TimeWindow::Week => Some(7 * DAY),
            TimeWindow::Month => Some(30 * DAY),
            TimeWindow::Year => Some(365 * DAY),
            TimeWindow::All => None,
        }
    }

    /// Human label used in the prompt ("the past week").
    pub fn label(&self) -> &'static str {
        match self {
            TimeWindow::Hour => "the past hour",
            TimeWindow::Day => "the past day",
            TimeWindow::Week => "the past week",
            TimeWindow::Month => "the past month",
            TimeWindow::Year => "the past year",
            TimeWindow::All => "all time",
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hour" => Ok(TimeWindow::Hour),
            "day" => Ok(TimeWindow::Day),
            "week" => Ok(TimeWindow::Week),
            "month" => Ok(TimeWindow::Month),
            "year" => Ok(TimeWindow::Year),
            "all" => Ok(TimeWindow::All),
            other => Err(format!("unknown time window '{}'", other)),
        }
    }
}

/// A ranked listing to query on each subreddit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    /// Ranked by score within `window`.
    Top { window: TimeWindow, limit: u32 },
    /// Currently trending.
    Hot { limit: u32 },
    /// Emerging posts gaining traction.
    Rising { limit: u32 },
}

impl Listing {
    /// Path segment of the listing endpoint (`/r/{name}/{segment}.json`).
    pub fn segment(&self) -> &'static str {
        match self {
            Listing::Top { .. } => "top",
            Listing::Hot { .. } => "hot",
            Listing::Rising { .. } => "rising",
        }
    }

    pub fn limit(&self) -> u32 {
        match self {
            Listing::Top { limit, .. } | Listing::Hot { limit } | Listing::Rising { limit } => {
                *limit
            }
        }
    }

    /// Query parameters for the listing request.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(2);
        if let Listing::Top { window, .. } = self {
            params.push(("t", window.as_str().to_string()));
        }
        params.push(("limit", self.limit().to_string()));
        params
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Listing::Top { window, .. } => write!(f, "top/{}", window),
            other => f.write_str(other.segment()),
        }
    }
}

/// Concatenated post text handed to the summarizer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AggregateText {
    text: String,
    items: usize,
}

impl AggregateText {
    pub fn new(text: String, items: usize) -> Self {
        Self { text, items }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of items rendered into the text.
    pub fn item_count(&self) -> usize {
        self.items
    }

    /// True when nothing was collected; the summarizer must not be called.
    pub fn is_empty(&self) -> bool {
        self.items == 0 || self.text.trim().is_empty()
    }
}

/// Text returned by the generation API. Written unchanged to every sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary(String);

impl Summary {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Result of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed { items: usize, summary_len: usize },
    /// Every source came back empty; nothing was sent to the API.
    NoContent,
}
