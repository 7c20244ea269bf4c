//! # optional-patterns
//!
//! Worked examples of idiomatic [`Option`] usage.
//!
//! ## Overview
//!
//! Every example is a small, total function over fixed in-memory data.
//! Where a pattern has an explicit form (`match`, `if let`) and a
//! combinator form (`map`, `filter`, `and_then`, ...), both are provided
//! and the tests hold them to the same results.
//!
//! - **Loyalty**: look up a customer's tier and derive points, free
//!   shipping and discounts from it
//! - **Patterns**: first match with a fallback branch, acting only when a
//!   value is present, eager versus lazy defaults, all-or-nothing
//!   composition of several optional inputs, and an optional parameter
//!   compared with separate entry points
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for the value types
//!
//! ## Example
//!
//! ```rust
//! use optional_patterns::prelude::*;
//!
//! let customer = Customer::new("Bruce Wayne");
//! assert_eq!(customer.points(), 500);
//! assert_eq!(customer.discount(), Some(Discount::percentage(20)));
//!
//! let parcel = build_shipping_object(&FixedDimensions::new(Some(500), Some(200), None));
//! assert_eq!(parcel, None);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use optional_patterns::prelude::*;
/// ```
pub mod prelude {
    pub use crate::loyalty::*;
    pub use crate::patterns::*;
}

pub mod config;
pub mod demo;
pub mod error;
pub mod loyalty;
pub mod patterns;
