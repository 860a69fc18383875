//! Player identity and cumulative league counters

use serde::{Deserialize, Serialize};
use std::fmt;

/// Points awarded for a win. Losses score nothing.
pub const POINTS_PER_WIN: u32 = 3;

/// Opaque player identifier, unique within a tournament
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Case-insensitive name comparison, Unicode aware ("Émile" matches "émile")
pub fn names_match(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// A registered player and their counters.
///
/// Counters are only changed by the result ledger; `points` and `played`
/// are kept alongside `won`/`lost` so a snapshot can be rendered without
/// recomputation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub points: u32,
    pub played: u32,
    pub won: u32,
    pub lost: u32,
}

impl Player {
    /// Create a player with all counters at zero
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            points: 0,
            played: 0,
            won: 0,
            lost: 0,
        }
    }

    /// Win rate (won / played), 0.0 before the first match
    pub fn win_rate(&self) -> f32 {
        if self.played == 0 {
            0.0
        } else {
            self.won as f32 / self.played as f32
        }
    }

    /// Win rate as a percentage rounded to one decimal place
    pub fn win_percentage(&self) -> f32 {
        (self.win_rate() * 1000.0).round() / 10.0
    }

    /// Whether the derived counters agree with won/lost
    pub fn is_consistent(&self) -> bool {
        self.played == self.won + self.lost && self.points == POINTS_PER_WIN * self.won
    }
}
