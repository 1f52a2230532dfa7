//! # Domain Layer
//!
//! Core business types for travel deal search: validated value objects,
//! canonical offer entities, and the matched [`Deal`](entities::Deal).
//!
//! The domain layer has no knowledge of providers or transports; everything
//! here is constructed from already-normalized data.

pub mod entities;
pub mod errors;
pub mod value_objects;
