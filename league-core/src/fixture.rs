//! Fixture - one scheduled match between two players

use serde::{Deserialize, Serialize};

use crate::player::PlayerId;

/// Lifecycle of a fixture. There is no way back to `Scheduled`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FixtureState {
    Scheduled,
    Completed,
}

/// A match between `home` and `away`.
///
/// `match_number` is the 1-based play order. `round` is always 1 for a
/// league; ordering is carried by the match number alone.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub match_number: u32,
    pub round: u32,
    pub home: PlayerId,
    pub away: PlayerId,
    pub completed: bool,
    pub winner: Option<PlayerId>,
}

impl Fixture {
    /// Create an unplayed league fixture
    pub fn new(match_number: u32, home: PlayerId, away: PlayerId) -> Self {
        Self {
            match_number,
            round: 1,
            home,
            away,
            completed: false,
            winner: None,
        }
    }

    pub fn state(&self) -> FixtureState {
        if self.completed {
            FixtureState::Completed
        } else {
            FixtureState::Scheduled
        }
    }

    /// Whether the player is home or away in this fixture
    pub fn involves(&self, player: &PlayerId) -> bool {
        self.home == *player || self.away == *player
    }

    /// The other participant, if `player` takes part
    pub fn opponent_of(&self, player: &PlayerId) -> Option<&PlayerId> {
        if self.home == *player {
            Some(&self.away)
        } else if self.away == *player {
            Some(&self.home)
        } else {
            None
        }
    }

    /// The losing participant of a completed fixture
    pub fn loser(&self) -> Option<&PlayerId> {
        self.winner.as_ref().and_then(|w| self.opponent_of(w))
    }

    /// Participants ordered independently of role, for counting pairings
    pub fn pair_key(&self) -> (PlayerId, PlayerId) {
        if self.home <= self.away {
            (self.home.clone(), self.away.clone())
        } else {
            (self.away.clone(), self.home.clone())
        }
    }
}
