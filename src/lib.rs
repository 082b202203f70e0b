//! reddit-roundup: weekly pop culture roundup from Reddit, written by an LLM.
//! Hexagonal layout: domain, ports, adapters, use cases.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
