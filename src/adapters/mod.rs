//! Infrastructure adapters. Implement outbound ports.
//!
//! Reddit, generation API, filesystem, terminal. Map errors to DomainError.

pub mod ai;
pub mod persistence;
pub mod reddit;
pub mod ui;
