//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`ProviderId`]: String-based provider adapter identifier
//!
//! ## Numeric Types
//!
//! - [`Price`]: Decimal money with checked arithmetic and 2-dp rounding
//! - [`StarRating`]: Hotel star rating, 0-5 with 0 meaning unknown
//!
//! ## Domain Tokens
//!
//! - [`BoardType`]: Board basis token (BB, HB, AI, ...), upper-cased
//!
//! ## Time
//!
//! - [`Timestamp`]: UTC timestamp wrapper

pub mod board;
pub mod ids;
pub mod price;
pub mod stars;
pub mod timestamp;

pub use board::BoardType;
pub use ids::ProviderId;
pub use price::Price;
pub use stars::StarRating;
pub use timestamp::Timestamp;
