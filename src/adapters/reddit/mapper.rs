//! Map Reddit listing JSON to domain entities.
//!
//! Listing shape: `{"data": {"children": [{"data": {...post...}}]}}`.

use crate::domain::ContentItem;
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct ListingResponse {
    #[serde(default)]
    pub data: ListingData,
}

#[derive(Debug, Deserialize, Default)]
pub struct ListingData {
    #[serde(default)]
    pub children: Vec<ListingChild>,
}

#[derive(Debug, Deserialize)]
pub struct ListingChild {
    #[serde(default)]
    pub data: RawPost,
}

/// Fields we read from a post. Everything is optional on the wire.
#[derive(Debug, Deserialize, Default)]
pub struct RawPost {
    pub id: Option<String>,
    pub title: Option<String>,
    pub selftext: Option<String>,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub num_comments: i64,
    #[serde(default)]
    pub created_utc: f64,
}

/// Truncate to at most `max_chars` characters (never splits a code point).
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Map one raw post. Returns `None` for posts without an id or with a blank title.
pub fn post_to_domain(post: RawPost, source: &str, body_max_chars: usize) -> Option<ContentItem> {
    let id = post.id.filter(|id| !id.is_empty())?;
    let title = post.title.as_deref().unwrap_or("").trim().to_string();
    if title.is_empty() {
        return None;
    }
    let selftext = post.selftext.as_deref().unwrap_or("").trim();
    let body = truncate_chars(selftext, body_max_chars).to_string();

    Some(ContentItem {
        id,
        title,
        body,
        source: source.to_string(),
        score: post.score,
        num_comments: post.num_comments,
        created_utc: post.created_utc as i64,
    })
}

/// Map a whole listing, preserving Reddit's order.
pub fn listing_to_domain(
    listing: ListingResponse,
    source: &str,
    body_max_chars: usize,
) -> Vec<ContentItem> {
    listing
        .data
        .children
        .into_iter()
        .filter_map(|child| post_to_domain(child.data, source, body_max_chars))
        .collect()
}
