//! League Core - Data model for round-robin tournaments
//!
//! This crate provides the shared types for league play:
//! - Player identities and cumulative counters
//! - Fixtures (home/away pairings with a sequence position)
//! - Roster registration and readiness checks
//! - The crate-wide error type

pub mod error;
pub mod fixture;
pub mod player;
pub mod roster;

// Re-exports for convenient access
pub use error::{LeagueError, Result};
pub use fixture::{Fixture, FixtureState};
pub use player::{names_match, Player, PlayerId, POINTS_PER_WIN};
pub use roster::{Roster, TournamentKind};
