//! Reddit adapter module. Implements ContentSourcePort.
//!
//! Provides the HTTP listing gateway and an in-memory source for testing.

pub mod client;
pub mod mapper;
pub mod mock_source;

pub use client::RedditGateway;
pub use mock_source::MockSource;
