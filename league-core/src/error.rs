//! Error types shared by the scheduler, the ledger and tournament setup

use crate::player::PlayerId;

/// Result alias used throughout the league crates
pub type Result<T> = std::result::Result<T, LeagueError>;

/// Validation failures raised synchronously by league operations.
///
/// None of these are retried internally; a failed call leaves all state
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeagueError {
    #[error("invalid roster: {0}")]
    InvalidRoster(String),

    #[error("match {match_number} already has a result; edit it instead")]
    AlreadyCompleted { match_number: u32 },

    #[error("match {match_number} has no result to edit")]
    NotCompleted { match_number: u32 },

    #[error("player {winner} did not take part in match {match_number}")]
    InvalidWinner { match_number: u32, winner: PlayerId },

    #[error("match {match_number} is inconsistent: {reason}")]
    InconsistentFixture {
        match_number: u32,
        reason: &'static str,
    },

    #[error("player name must not be empty")]
    EmptyName,

    #[error("a player named {0:?} is already registered")]
    DuplicateName(String),

    #[error("unknown player: {0}")]
    UnknownPlayer(String),

    #[error("unknown match number: {0}")]
    UnknownFixture(u32),

    #[error("a league needs at least {required} players, got {actual}")]
    NotEnoughPlayers { required: usize, actual: usize },

    #[error("a cup needs 2, 4, 8, 16, ... players, got {0}")]
    CupSizeNotPowerOfTwo(usize),

    #[error("{0} scheduling is not supported")]
    UnsupportedFormat(String),

    #[error("tournament is already completed")]
    TournamentClosed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = LeagueError::AlreadyCompleted { match_number: 4 };
        assert_eq!(
            err.to_string(),
            "match 4 already has a result; edit it instead"
        );

        let err = LeagueError::InvalidWinner {
            match_number: 2,
            winner: PlayerId::new("p9"),
        };
        assert_eq!(err.to_string(), "player p9 did not take part in match 2");

        let err = LeagueError::NotEnoughPlayers {
            required: 3,
            actual: 2,
        };
        assert_eq!(err.to_string(), "a league needs at least 3 players, got 2");

        let err = LeagueError::InconsistentFixture {
            match_number: 5,
            reason: "completed without a winner",
        };
        assert_eq!(
            err.to_string(),
            "match 5 is inconsistent: completed without a winner"
        );
    }
}
