//! Roster - player registration before a tournament is scheduled
//!
//! The roster is the only place players can be added, renamed or removed.
//! Creating a tournament consumes it, so the player set is frozen once
//! fixtures exist.

use serde::{Deserialize, Serialize};

use crate::error::{LeagueError, Result};
use crate::player::{names_match, Player, PlayerId};

/// Minimum roster size for league play
pub const MIN_LEAGUE_PLAYERS: usize = 3;

/// Tournament format chosen at setup
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TournamentKind {
    /// Everyone plays everyone
    #[default]
    League,
    /// Single elimination bracket
    Cup,
}

impl TournamentKind {
    pub fn name(&self) -> &'static str {
        match self {
            TournamentKind::League => "league",
            TournamentKind::Cup => "cup",
        }
    }
}

/// Ordered list of registered players.
///
/// Registration order is significant: it is the scheduler's input order
/// and the final standings tie-break.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    players: Vec<Player>,
    next_id: u32,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from a list of names, in order
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut roster = Self::new();
        for name in names {
            roster.add_player(name.as_ref())?;
        }
        Ok(roster)
    }

    /// Register a new player and return it
    pub fn add_player(&mut self, name: &str) -> Result<&Player> {
        let name = self.validate_name(name, None)?;

        self.next_id += 1;
        let id = PlayerId::new(format!("p{}", self.next_id));
        self.players.push(Player::new(id, name));

        let index = self.players.len() - 1;
        Ok(&self.players[index])
    }

    /// Remove a registered player
    pub fn remove_player(&mut self, id: &PlayerId) -> Result<Player> {
        let index = self.index_of(id)?;
        Ok(self.players.remove(index))
    }

    /// Change a player's display name
    pub fn rename_player(&mut self, id: &PlayerId, name: &str) -> Result<()> {
        let index = self.index_of(id)?;
        let name = self.validate_name(name, Some(index))?;
        self.players[index].name = name;
        Ok(())
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Player> {
        let name = name.trim();
        self.players
            .iter()
            .find(|p| names_match(&p.name, name))
    }

    /// Number of fixtures a league over this roster will contain
    pub fn expected_fixtures(&self, home_away: bool) -> usize {
        let n = self.players.len();
        let pairs = n * n.saturating_sub(1) / 2;
        if home_away {
            pairs * 2
        } else {
            pairs
        }
    }

    /// Check the roster size against the format's policy
    pub fn check_ready(&self, kind: TournamentKind) -> Result<()> {
        let n = self.players.len();
        match kind {
            TournamentKind::League => {
                if n < MIN_LEAGUE_PLAYERS {
                    return Err(LeagueError::NotEnoughPlayers {
                        required: MIN_LEAGUE_PLAYERS,
                        actual: n,
                    });
                }
            }
            TournamentKind::Cup => {
                if n < 2 || !n.is_power_of_two() {
                    return Err(LeagueError::CupSizeNotPowerOfTwo(n));
                }
            }
        }
        Ok(())
    }

    /// Hand the ordered player list over to tournament creation
    pub fn into_players(self) -> Vec<Player> {
        self.players
    }

    fn index_of(&self, id: &PlayerId) -> Result<usize> {
        self.players
            .iter()
            .position(|p| p.id == *id)
            .ok_or_else(|| LeagueError::UnknownPlayer(id.to_string()))
    }

    /// Trim and check a name; `skip` excludes the player being renamed
    fn validate_name(&self, name: &str, skip: Option<usize>) -> Result<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LeagueError::EmptyName);
        }

        let taken = self
            .players
            .iter()
            .enumerate()
            .any(|(i, p)| Some(i) != skip && names_match(&p.name, name));
        if taken {
            return Err(LeagueError::DuplicateName(name.to_string()));
        }

        Ok(name.to_string())
    }
}
