//! # Application Services
//!
//! Services that orchestrate domain logic and infrastructure.
//!
//! This module provides application-level services including:
//! - [`FallbackOrchestrator`]: Ordered, failure-tolerant provider chains
//! - [`merge`]: Cross-provider aggregation and deduplication
//! - [`DealMatcher`]: Flight x hotel cross-product matching
//! - [`DealSearchService`]: The top-level search pipeline

pub mod aggregation;
pub mod matching;
pub mod orchestrator;
pub mod search;

pub use aggregation::merge;
pub use matching::DealMatcher;
pub use orchestrator::{CategoryOutcome, FallbackOrchestrator, FallbackPolicy};
pub use search::{DealSearchService, SearchOutcome};
