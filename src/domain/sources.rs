//! Fixed list of subreddits the roundup is built from.

/// Source category. Event sources carry the most weight; gossip is heavily capped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Event sources.
    A,
    /// Reaction validation.
    B,
    /// Gossip.
    C,
}

/// One subreddit to query.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceSpec {
    pub name: String,
    pub tier: Tier,
    /// Max items kept from this source per run.
    pub cap: usize,
    /// Multiplier applied to engagement when ranking.
    pub weight: f64,
}

impl SourceSpec {
    pub fn new(name: impl Into<String>, tier: Tier, cap: usize, weight: f64) -> Self {
        Self {
            name: name.into(),
            tier,
            cap,
            weight,
        }
    }
}

/// Mainstream pop culture subreddits, in query order.
pub fn default_sources() -> Vec<SourceSpec> {
    vec![
        SourceSpec::new("entertainment", Tier::A, 35, 1.25),
        SourceSpec::new("movies", Tier::A, 25, 1.15),
        SourceSpec::new("television", Tier::A, 25, 1.15),
        SourceSpec::new("popculturechat", Tier::A, 35, 1.20),
        SourceSpec::new("popheads", Tier::A, 25, 1.10),
        SourceSpec::new("hiphopheads", Tier::A, 20, 1.10),
        SourceSpec::new("boxoffice", Tier::A, 15, 1.05),
        SourceSpec::new("LiveFromNewYork", Tier::A, 15, 1.05),
        SourceSpec::new("TikTokCringe", Tier::A, 20, 1.05),
        SourceSpec::new("BlackPeopleTwitter", Tier::B, 12, 0.85),
        SourceSpec::new("WhitePeopleTwitter", Tier::B, 12, 0.85),
        SourceSpec::new("memes", Tier::B, 12, 0.80),
        SourceSpec::new("me_irl", Tier::B, 10, 0.75),
        SourceSpec::new("Fauxmoi", Tier::C, 10, 0.70),
    ]
}
