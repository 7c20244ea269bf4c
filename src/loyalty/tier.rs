//! Loyalty tiers and the discounts they carry.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

// =============================================================================
// LoyaltyTier
// =============================================================================

/// A customer's loyalty classification.
///
/// Every tier is worth a fixed number of points, and some tiers come with
/// a [`Discount`].
///
/// # Examples
///
/// ```
/// use optional_patterns::loyalty::{DiscountKind, LoyaltyTier};
///
/// assert_eq!(LoyaltyTier::Gold.points(), 200);
/// assert_eq!(LoyaltyTier::Gold.discount().map(|d| d.kind), Some(DiscountKind::Flat));
/// assert_eq!(LoyaltyTier::Silver.discount(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum LoyaltyTier {
    /// Entry tier, no discount
    Silver,
    /// Middle tier, flat discount
    Gold,
    /// Top tier, percentage discount
    Platinum,
}

impl LoyaltyTier {
    /// All tiers, lowest first.
    pub const ALL: [Self; 3] = [Self::Silver, Self::Gold, Self::Platinum];

    /// Points awarded for this tier.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Self::Silver => 100,
            Self::Gold => 200,
            Self::Platinum => 500,
        }
    }

    /// The discount attached to this tier, if any.
    #[must_use]
    pub const fn discount(self) -> Option<Discount> {
        match self {
            Self::Silver => None,
            Self::Gold => Some(Discount::flat(100)),
            Self::Platinum => Some(Discount::percentage(20)),
        }
    }

    /// Whether orders of this tier ship for free.
    #[must_use]
    pub const fn ships_free(self) -> bool {
        matches!(self, Self::Gold | Self::Platinum)
    }

    /// Upper-case name of the tier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Silver => "SILVER",
            Self::Gold => "GOLD",
            Self::Platinum => "PLATINUM",
        }
    }
}

impl fmt::Display for LoyaltyTier {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for LoyaltyTier {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(input.trim()))
            .ok_or_else(|| ParseError::new("LoyaltyTier", input))
    }
}

// =============================================================================
// Discount
// =============================================================================

/// How a [`Discount`] magnitude is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum DiscountKind {
    /// A fixed amount off
    Flat,
    /// A percentage off
    Percentage,
}

impl DiscountKind {
    /// Upper-case name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flat => "FLAT",
            Self::Percentage => "PERCENTAGE",
        }
    }
}

impl fmt::Display for DiscountKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for DiscountKind {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        [Self::Flat, Self::Percentage]
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(input.trim()))
            .ok_or_else(|| ParseError::new("DiscountKind", input))
    }
}

/// A discount: its kind and magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Discount {
    /// How `value` is applied
    pub kind: DiscountKind,
    /// Amount or percentage, depending on `kind`
    pub value: u32,
}

impl Discount {
    /// Creates a new `Discount`
    #[must_use]
    pub const fn new(kind: DiscountKind, value: u32) -> Self {
        Self { kind, value }
    }

    /// A fixed-amount discount
    #[must_use]
    pub const fn flat(value: u32) -> Self {
        Self::new(DiscountKind::Flat, value)
    }

    /// A percentage discount
    #[must_use]
    pub const fn percentage(value: u32) -> Self {
        Self::new(DiscountKind::Percentage, value)
    }
}

impl fmt::Display for Discount {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiscountKind::Flat => write!(formatter, "{} off", self.value),
            DiscountKind::Percentage => write!(formatter, "{}% off", self.value),
        }
    }
}

static_assertions::assert_impl_all!(LoyaltyTier: Copy, Send, Sync);
static_assertions::assert_impl_all!(Discount: Copy, Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(LoyaltyTier::Silver, 100)]
    #[case(LoyaltyTier::Gold, 200)]
    #[case(LoyaltyTier::Platinum, 500)]
    fn test_tier_points(#[case] tier: LoyaltyTier, #[case] expected: u32) {
        assert_eq!(tier.points(), expected);
    }

    #[rstest]
    #[case(LoyaltyTier::Silver, None)]
    #[case(LoyaltyTier::Gold, Some(Discount::new(DiscountKind::Flat, 100)))]
    #[case(
        LoyaltyTier::Platinum,
        Some(Discount::new(DiscountKind::Percentage, 20))
    )]
    fn test_tier_discount(#[case] tier: LoyaltyTier, #[case] expected: Option<Discount>) {
        assert_eq!(tier.discount(), expected);
    }

    #[rstest]
    #[case(LoyaltyTier::Silver, false)]
    #[case(LoyaltyTier::Gold, true)]
    #[case(LoyaltyTier::Platinum, true)]
    fn test_tier_ships_free(#[case] tier: LoyaltyTier, #[case] expected: bool) {
        assert_eq!(tier.ships_free(), expected);
    }

    #[rstest]
    #[case("GOLD", LoyaltyTier::Gold)]
    #[case("platinum", LoyaltyTier::Platinum)]
    #[case("  Silver ", LoyaltyTier::Silver)]
    fn test_tier_from_str(#[case] input: &str, #[case] expected: LoyaltyTier) {
        assert_eq!(input.parse::<LoyaltyTier>(), Ok(expected));
    }

    #[rstest]
    fn test_tier_from_str_rejects_unknown() {
        let error = "BRONZE".parse::<LoyaltyTier>().unwrap_err();

        assert_eq!(error, ParseError::new("LoyaltyTier", "BRONZE"));
    }

    #[rstest]
    fn test_tier_display_round_trips_through_from_str() {
        for tier in LoyaltyTier::ALL {
            assert_eq!(tier.to_string().parse::<LoyaltyTier>(), Ok(tier));
        }
    }

    #[rstest]
    #[case("flat", DiscountKind::Flat)]
    #[case("PERCENTAGE", DiscountKind::Percentage)]
    fn test_discount_kind_from_str(#[case] input: &str, #[case] expected: DiscountKind) {
        assert_eq!(input.parse::<DiscountKind>(), Ok(expected));
    }

    #[rstest]
    #[case(Discount::flat(100), "100 off")]
    #[case(Discount::percentage(20), "20% off")]
    fn test_discount_display(#[case] discount: Discount, #[case] expected: &str) {
        assert_eq!(discount.to_string(), expected);
    }
}
