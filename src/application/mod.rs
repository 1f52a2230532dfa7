//! # Application Layer
//!
//! Services that orchestrate domain logic and infrastructure: provider
//! fallback chains, offer aggregation, deal matching, and the top-level
//! search pipeline.

pub mod services;
