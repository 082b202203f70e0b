//! Port traits. API boundaries for the hexagon.
//!
//! Outbound only: the application calls into the content platform, the generation API
//! and the output sinks. The CLI drives the use cases directly.

pub mod outbound;

pub use outbound::{ContentSourcePort, SummarizerPort, SummarySinkPort};
