//! Application use cases. Orchestrate domain logic via ports.

pub mod aggregator;
pub mod collector_service;
pub mod roundup_service;
pub mod summarize_service;

pub use aggregator::aggregate;
pub use collector_service::{CollectSettings, CollectorService};
pub use roundup_service::RoundupService;
pub use summarize_service::SummarizeService;
