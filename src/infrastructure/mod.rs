//! # Infrastructure Layer
//!
//! Adapters to the outside world: provider HTTP integrations, bearer token
//! caching, and environment-driven configuration.

pub mod config;
pub mod providers;
