//! Application configuration. API credentials, endpoints, collection knobs, output path.

use crate::domain::{DomainError, Listing, TimeWindow};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_AI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_AI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_REDDIT_BASE_URL: &str = "https://www.reddit.com";
/// Reddit rejects requests without a descriptive User-Agent.
pub const DEFAULT_USER_AGENT: &str = "PopCultureScraper/1.0 (Gen Z weekly roundup)";
pub const DEFAULT_OUTPUT_PATH: &str = "pop_culture_roundup.txt";

/// Per-listing request limits.
pub const TOP_LIMIT: u32 = 100;
pub const HOT_LIMIT: u32 = 75;
pub const RISING_LIMIT: u32 = 50;

#[derive(Debug, Deserialize, Default, Clone)]
pub struct AppConfig {
    // ─────────────────────────────────────────────────────────────────────────
    // AI Configuration
    // ─────────────────────────────────────────────────────────────────────────
    /// Generation API key. Read from ROUNDUP_AI_API_KEY, falling back to OPENAI_API_KEY.
    #[serde(default)]
    pub ai_api_key: Option<String>,

    /// Chat completions endpoint. Read from ROUNDUP_AI_API_URL.
    #[serde(default)]
    pub ai_api_url: Option<String>,

    /// Model name. Read from ROUNDUP_AI_MODEL.
    #[serde(default)]
    pub ai_model: Option<String>,

    #[serde(default)]
    pub ai_max_tokens: Option<u32>,

    #[serde(default)]
    pub ai_timeout_secs: Option<u64>,

    // ─────────────────────────────────────────────────────────────────────────
    // Reddit Collection
    // ─────────────────────────────────────────────────────────────────────────
    /// Base URL for listing requests. Overridable for tests and proxies.
    #[serde(default)]
    pub reddit_base_url: Option<String>,

    #[serde(default)]
    pub user_agent: Option<String>,

    #[serde(default)]
    pub reddit_timeout_secs: Option<u64>,

    /// Window for the `top` listing and the post age cutoff ("week" by default).
    #[serde(default)]
    pub top_window: Option<String>,

    /// Also query the `rising` listing.
    #[serde(default)]
    pub include_rising: Option<bool>,

    /// Log and skip a subreddit whose query fails instead of aborting the run.
    #[serde(default)]
    pub skip_failed_sources: Option<bool>,

    /// Sort collected posts by weighted engagement before truncating.
    #[serde(default)]
    pub rank_by_engagement: Option<bool>,

    #[serde(default)]
    pub max_posts: Option<usize>,

    #[serde(default)]
    pub body_max_chars: Option<usize>,

    // ─────────────────────────────────────────────────────────────────────────
    // Output
    // ─────────────────────────────────────────────────────────────────────────
    /// Summary file, overwritten each run. Read from ROUNDUP_OUTPUT_PATH.
    #[serde(default)]
    pub output_path: Option<String>,

    /// Print the collected posts to stdout before summarizing.
    #[serde(default)]
    pub show_posts: Option<bool>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("ROUNDUP").try_parsing(true));
        if let Ok(path) = std::env::var("ROUNDUP_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let mut cfg = Self::from_config(c.build()?)?;
        // OPENAI_API_KEY is read directly (no ROUNDUP_ prefix) so an existing .env keeps working
        if cfg.ai_api_key.is_none() {
            cfg.ai_api_key = std::env::var("OPENAI_API_KEY").ok();
        }
        Ok(cfg)
    }

    /// Deserialize from an already-built `config::Config`.
    pub fn from_config(c: config::Config) -> Result<Self, config::ConfigError> {
        c.try_deserialize()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // AI Configuration Helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the API key, or a `Config` error if it is missing or blank.
    pub fn require_ai_api_key(&self) -> Result<String, DomainError> {
        match self.ai_api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key.to_string()),
            _ => Err(DomainError::Config(
                "OPENAI_API_KEY (or ROUNDUP_AI_API_KEY) is not set".to_string(),
            )),
        }
    }

    pub fn ai_api_url_or_default(&self) -> String {
        self.ai_api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_AI_API_URL.to_string())
    }

    pub fn ai_model_or_default(&self) -> String {
        self.ai_model
            .clone()
            .unwrap_or_else(|| DEFAULT_AI_MODEL.to_string())
    }

    /// Defaults to 2500.
    pub fn ai_max_tokens_or_default(&self) -> u32 {
        self.ai_max_tokens.unwrap_or(2500)
    }

    /// Defaults to 120 seconds.
    pub fn ai_timeout(&self) -> Duration {
        Duration::from_secs(self.ai_timeout_secs.unwrap_or(120))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Collection Helpers
    // ─────────────────────────────────────────────────────────────────────────

    pub fn reddit_base_url_or_default(&self) -> String {
        self.reddit_base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_REDDIT_BASE_URL.to_string())
    }

    pub fn user_agent_or_default(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string())
    }

    /// Defaults to 10 seconds.
    pub fn reddit_timeout(&self) -> Duration {
        Duration::from_secs(self.reddit_timeout_secs.unwrap_or(10))
    }

    /// Parsed `top_window`. Defaults to a week; an unknown value is a `Config` error.
    pub fn top_window(&self) -> Result<TimeWindow, DomainError> {
        match self.top_window.as_deref() {
            Some(raw) => raw.parse().map_err(DomainError::Config),
            None => Ok(TimeWindow::Week),
        }
    }

    /// Listings queried per source, in order: top, hot, then rising when enabled.
    pub fn listings(&self) -> Result<Vec<Listing>, DomainError> {
        let mut listings = vec![
            Listing::Top {
                window: self.top_window()?,
                limit: TOP_LIMIT,
            },
            Listing::Hot { limit: HOT_LIMIT },
        ];
        if self.include_rising.unwrap_or(false) {
            listings.push(Listing::Rising {
                limit: RISING_LIMIT,
            });
        }
        Ok(listings)
    }

    pub fn skip_failed_sources(&self) -> bool {
        self.skip_failed_sources.unwrap_or(false)
    }

    pub fn rank_by_engagement(&self) -> bool {
        self.rank_by_engagement.unwrap_or(true)
    }

    /// Defaults to 200.
    pub fn max_posts_or_default(&self) -> usize {
        self.max_posts.unwrap_or(200)
    }

    /// Defaults to 800 characters.
    pub fn body_max_chars_or_default(&self) -> usize {
        self.body_max_chars.unwrap_or(800)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Output Helpers
    // ─────────────────────────────────────────────────────────────────────────

    pub fn output_path_or_default(&self) -> PathBuf {
        PathBuf::from(
            self.output_path
                .as_deref()
                .unwrap_or(DEFAULT_OUTPUT_PATH),
        )
    }

    pub fn show_posts(&self) -> bool {
        self.show_posts.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(toml: &str) -> AppConfig {
        let c = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap();
        AppConfig::from_config(c).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.ai_api_url_or_default(), DEFAULT_AI_API_URL);
        assert_eq!(cfg.ai_model_or_default(), "gpt-4o-mini");
        assert_eq!(cfg.ai_max_tokens_or_default(), 2500);
        assert_eq!(cfg.reddit_timeout(), Duration::from_secs(10));
        assert_eq!(cfg.output_path_or_default(), PathBuf::from("pop_culture_roundup.txt"));
        assert!(!cfg.skip_failed_sources());
        assert!(cfg.rank_by_engagement());
        assert!(!cfg.show_posts());
        assert_eq!(cfg.max_posts_or_default(), 200);
    }

    #[test]
    fn test_default_listings_top_week_then_hot() {
        let listings = AppConfig::default().listings().unwrap();
        assert_eq!(
            listings,
            vec![
                Listing::Top {
                    window: TimeWindow::Week,
                    limit: TOP_LIMIT
                },
                Listing::Hot { limit: HOT_LIMIT },
            ]
        );
    }

    #[test]
    fn test_rising_and_window_from_file() {
        let cfg = from_toml(
            r#"
            top_window = "month"
            include_rising = true
            output_path = "out/roundup.txt"
            "#,
        );
        let listings = cfg.listings().unwrap();
        assert_eq!(listings.len(), 3);
        assert_eq!(listings[0].to_string(), "top/month");
        assert_eq!(listings[2], Listing::Rising { limit: RISING_LIMIT });
        assert_eq!(cfg.output_path_or_default(), PathBuf::from("out/roundup.txt"));
    }

    #[test]
    fn test_invalid_window_is_config_error() {
        let cfg = from_toml(r#"top_window = "fortnight""#);
        assert!(matches!(cfg.listings(), Err(DomainError::Config(_))));
    }

    #[test]
    fn test_missing_or_blank_key_rejected() {
        let mut cfg = AppConfig::default();
        assert!(matches!(cfg.require_ai_api_key(), Err(DomainError::Config(_))));
        cfg.ai_api_key = Some("   ".to_string());
        assert!(matches!(cfg.require_ai_api_key(), Err(DomainError::Config(_))));
        cfg.ai_api_key = Some("sk-test".to_string());
        assert_eq!(cfg.require_ai_api_key().unwrap(), "sk-test");
    }
}
