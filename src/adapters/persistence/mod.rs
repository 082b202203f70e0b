//! Persistence adapters. The summary file is the only state that outlives a run.

pub mod summary_file;

pub use summary_file::SummaryFile;
