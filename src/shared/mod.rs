//! Cross-cutting pieces shared by the composition root and use cases.

pub mod config;
