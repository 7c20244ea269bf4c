//! Fluent filtering: award the first century.
//!
//! `filter` + `next` on an iterator yields an `Option`, and the caller
//! branches on presence to pick one of two outcomes.
//!
//! # Examples
//!
//! ```
//! use optional_patterns::patterns::{Award, ScoredEntry, award};
//!
//! let scores = [ScoredEntry::new("Scott Lang", 56), ScoredEntry::new("Tony Stark", 120)];
//! assert_eq!(award(&scores), Award::Winner("Tony Stark".to_string()));
//!
//! assert_eq!(award(&[]), Award::NoWinner);
//! ```

use std::fmt;

/// Score that counts as a century.
pub const CENTURY: u32 = 100;

/// A player's score.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredEntry {
    /// Name of the player
    pub player: String,
    /// Score reached
    pub value: u32,
}

impl ScoredEntry {
    /// Creates a new `ScoredEntry`
    #[must_use]
    pub fn new(player: impl Into<String>, value: u32) -> Self {
        Self {
            player: player.into(),
            value,
        }
    }

    /// Whether this score is a century or higher.
    #[must_use]
    pub const fn is_century(&self) -> bool {
        self.value >= CENTURY
    }
}

/// The sample scores used by the demo.
#[must_use]
pub fn sample_scores() -> Vec<ScoredEntry> {
    vec![
        ScoredEntry::new("Peter Parker", 43),
        ScoredEntry::new("Bruce Wayne", 110),
        ScoredEntry::new("Scott Lang", 56),
        ScoredEntry::new("Peter Parker", 100),
        ScoredEntry::new("Bruce Wayne", 86),
        ScoredEntry::new("Tony Stark", 98),
    ]
}

/// The first entry, in order, that reached a century.
#[must_use]
pub fn first_centurion(entries: &[ScoredEntry]) -> Option<&ScoredEntry> {
    entries.iter().find(|entry| entry.is_century())
}

/// Outcome of handing out the century award.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Award {
    /// The named player gets the award
    Winner(String),
    /// Nobody reached a century
    NoWinner,
}

impl fmt::Display for Award {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Winner(player) => write!(formatter, "Award goes to {player}"),
            Self::NoWinner => formatter.write_str("Nobody gets an award"),
        }
    }
}

/// Decides the award for the first centurion.
#[must_use]
pub fn award(entries: &[ScoredEntry]) -> Award {
    first_centurion(entries)
        .map_or(Award::NoWinner, |entry| Award::Winner(entry.player.clone()))
}
