//! An optional parameter versus separate entry points.
//!
//! [`search_for_optional`] takes the minimum rating as an `Option<u32>`,
//! which makes every caller spell out `None`. [`search_for`] and
//! [`search_for_with_minimum`] say the same thing with plain arguments.
//! All three return the same players for equivalent inputs.
//!
//! # Examples
//!
//! ```
//! use optional_patterns::patterns::{
//!     Country, search_for, search_for_optional, search_for_with_minimum,
//! };
//!
//! assert_eq!(search_for(Country::Nl), search_for_optional(Country::Nl, None));
//! assert_eq!(
//!     search_for_with_minimum(Country::In, 1000),
//!     search_for_optional(Country::In, Some(1000)),
//! );
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Rating used when no minimum is given.
pub const RATING_MIN_VALUE: u32 = 0;

/// Country a player represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Country {
    /// Netherlands
    Nl,
    /// India
    In,
    /// United States
    Us,
    /// Belgium
    Be,
    /// France
    Fr,
}

impl Country {
    /// Every country, in declaration order.
    pub const ALL: [Self; 5] = [Self::Nl, Self::In, Self::Us, Self::Be, Self::Fr];

    /// Two-letter code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Nl => "NL",
            Self::In => "IN",
            Self::Us => "US",
            Self::Be => "BE",
            Self::Fr => "FR",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.code())
    }
}

impl FromStr for Country {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|country| country.code().eq_ignore_ascii_case(input.trim()))
            .ok_or_else(|| ParseError::new("Country", input))
    }
}

/// A rated player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    /// Country the player represents
    pub country: Country,
    /// Current rating
    pub rating: u32,
}

impl Player {
    /// Creates a new `Player`
    #[must_use]
    pub const fn new(country: Country, rating: u32) -> Self {
        Self { country, rating }
    }
}

static_assertions::assert_impl_all!(Player: Copy, Send, Sync);

/// Every player known to the search.
pub static ALL_PLAYERS: [Player; 8] = [
    Player::new(Country::Nl, 800),
    Player::new(Country::In, 1000),
    Player::new(Country::Us, 1100),
    Player::new(Country::Be, 800),
    Player::new(Country::In, 800),
    Player::new(Country::Nl, 1100),
    Player::new(Country::Fr, 700),
    Player::new(Country::Be, 1000),
];

/// Players from `country` rated at least `minimum_rating`, or at least
/// [`RATING_MIN_VALUE`] when no minimum is given.
#[must_use]
pub fn search_for_optional(country: Country, minimum_rating: Option<u32>) -> Vec<Player> {
    let minimum_rating = minimum_rating.unwrap_or(RATING_MIN_VALUE);
    ALL_PLAYERS
        .iter()
        .filter(|player| player.country == country)
        .filter(|player| player.rating >= minimum_rating)
        .copied()
        .collect()
}

/// Every player from `country`.
#[must_use]
pub fn search_for(country: Country) -> Vec<Player> {
    search_for_with_minimum(country, RATING_MIN_VALUE)
}

/// Players from `country` rated at least `minimum_rating`.
#[must_use]
pub fn search_for_with_minimum(country: Country, minimum_rating: u32) -> Vec<Player> {
    ALL_PLAYERS
        .iter()
        .filter(|player| player.country == country && player.rating >= minimum_rating)
        .copied()
        .collect()
}
