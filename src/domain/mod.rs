//! Core domain layer. No external I/O dependencies.
//!
//! Entities, the fixed source list and the roundup instruction live here.

pub mod entities;
pub mod errors;
pub mod prompt;
pub mod sources;

pub use entities::{AggregateText, ContentItem, Listing, RunOutcome, Summary, TimeWindow};
pub use errors::DomainError;
pub use prompt::Instruction;
pub use sources::{SourceSpec, Tier, default_sources};
