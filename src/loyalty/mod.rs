//! Loyalty lookups.
//!
//! A customer's name is looked up in a fixed directory to find their
//! [`LoyaltyTier`]. Points, free-shipping eligibility and discounts are
//! all derived from that optional tier.

mod customer;
mod tier;

pub use customer::{Customer, lookup_tier};
pub use tier::{Discount, DiscountKind, LoyaltyTier};
