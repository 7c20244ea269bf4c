//! Customer lookups against the fixed loyalty directory.
//!
//! Each derived value is written twice: once with an explicit presence
//! check (`match` / `if let`) and once as a combinator chain. Both forms
//! must agree for every input; the tests hold them to that.
//!
//! # Examples
//!
//! ```
//! use optional_patterns::loyalty::{Customer, DiscountKind, LoyaltyTier};
//!
//! let customer = Customer::new("Scott Lang");
//! assert_eq!(customer.loyalty_tier(), Some(LoyaltyTier::Gold));
//! assert_eq!(customer.points(), 200);
//! assert!(customer.free_shipping_eligible());
//! assert_eq!(customer.discount().map(|d| d.kind), Some(DiscountKind::Flat));
//!
//! let stranger = Customer::new("Peter Quill");
//! assert_eq!(stranger.points(), 0);
//! assert_eq!(stranger.discount(), None);
//! ```

use super::tier::{Discount, LoyaltyTier};

/// The fixed name to tier mapping.
static LOYALTY_DIRECTORY: [(&str, LoyaltyTier); 5] = [
    ("Peter Parker", LoyaltyTier::Silver),
    ("Bruce Wayne", LoyaltyTier::Platinum),
    ("Scott Lang", LoyaltyTier::Gold),
    ("Tony Stark", LoyaltyTier::Platinum),
    ("Bruce Banner", LoyaltyTier::Gold),
];

/// Looks up the loyalty tier registered for `name`.
///
/// Returns `None` for names that are not in the directory.
#[must_use]
pub fn lookup_tier(name: &str) -> Option<LoyaltyTier> {
    LOYALTY_DIRECTORY
        .iter()
        .find(|(registered, _)| *registered == name)
        .map(|&(_, tier)| tier)
}

/// A customer, identified by name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Customer {
    name: String,
}

impl Customer {
    /// Creates a new `Customer`
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The customer's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The customer's loyalty tier, if registered.
    #[must_use]
    pub fn loyalty_tier(&self) -> Option<LoyaltyTier> {
        lookup_tier(&self.name)
    }

    // =========================================================================
    // Status line
    // =========================================================================

    /// Status message, branching explicitly on presence.
    #[must_use]
    #[allow(clippy::option_if_let_else)]
    pub fn status_line_explicit(&self) -> String {
        match self.loyalty_tier() {
            Some(tier) => format!("Customer's loyalty status is: {tier}"),
            None => String::from("No loyalty status found for customer."),
        }
    }

    /// Status message, built with `map_or_else`.
    #[must_use]
    pub fn status_line(&self) -> String {
        self.loyalty_tier().map_or_else(
            || String::from("No loyalty status found for customer."),
            |tier| format!("Customer's loyalty status is: {tier}"),
        )
    }

    // =========================================================================
    // Points
    // =========================================================================

    /// Points for the customer's tier, or 0 when unregistered.
    #[must_use]
    pub fn points_explicit(&self) -> u32 {
        if let Some(tier) = self.loyalty_tier() {
            return tier.points();
        }
        0
    }

    /// Points for the customer's tier, or 0 when unregistered.
    #[must_use]
    pub fn points(&self) -> u32 {
        self.loyalty_tier().map_or(0, LoyaltyTier::points)
    }

    // =========================================================================
    // Free shipping
    // =========================================================================

    /// Whether the customer's tier ships for free.
    #[must_use]
    #[allow(clippy::option_if_let_else)]
    pub fn free_shipping_eligible_explicit(&self) -> bool {
        match self.loyalty_tier() {
            Some(tier) => tier == LoyaltyTier::Gold || tier == LoyaltyTier::Platinum,
            None => false,
        }
    }

    /// Whether the customer's tier ships for free.
    #[must_use]
    pub fn free_shipping_eligible(&self) -> bool {
        self.loyalty_tier().is_some_and(LoyaltyTier::ships_free)
    }

    // =========================================================================
    // Discount
    // =========================================================================

    /// The discount the customer is entitled to.
    ///
    /// Absent both when the customer is unregistered and when the tier
    /// carries no discount.
    #[must_use]
    pub fn discount_explicit(&self) -> Option<Discount> {
        if let Some(tier) = self.loyalty_tier() {
            return tier.discount();
        }
        None
    }

    /// The discount the customer is entitled to, flattened with `and_then`.
    #[must_use]
    pub fn discount(&self) -> Option<Discount> {
        self.loyalty_tier().and_then(LoyaltyTier::discount)
    }
}
