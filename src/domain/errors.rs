//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Missing or invalid configuration (e.g. no API key). Raised before any network call.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Collection failed for r/{subreddit} ({listing}): {message}")]
    Collection {
        subreddit: String,
        listing: String,
        message: String,
    },

    #[error("AI summarization failed: {0}")]
    Summarization(String),

    #[error("Output error: {0}")]
    Output(String),
}

impl DomainError {
    pub fn collection(
        subreddit: impl Into<String>,
        listing: impl std::fmt::Display,
        message: impl Into<String>,
    ) -> Self {
        Self::Collection {
            subreddit: subreddit.into(),
            listing: listing.to_string(),
            message: message.into(),
        }
    }
}
