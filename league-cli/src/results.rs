//! Record and edit commands - enter or correct a match result
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: resolve_winner(), apply_result()
//! - Level 3: (delegated to league-tournament crate)
//! - Level 4: reporting

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use league_core::PlayerId;
use league_tournament::{LedgerUpdate, Tournament, TournamentStatus};

use crate::schedule::describe_fixture;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct ResultArgs {
    /// Tournament file
    #[arg(long, value_name = "FILE", default_value = "league.json")]
    pub file: PathBuf,

    /// Match number
    #[arg(long = "match", value_name = "N")]
    pub match_number: u32,

    /// Winner, by name or player id
    #[arg(long)]
    pub winner: String,
}

/// Whether a result is entered for the first time or corrected
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Record,
    Edit,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run record/edit command
///
/// 1. Load the tournament
/// 2. Apply the result
/// 3. Save and report
pub fn run(args: ResultArgs, action: Action) -> Result<()> {
    let mut tournament = Tournament::load(&args.file)?;

    let was_active = tournament.status == TournamentStatus::Active;
    let update = apply_result(&mut tournament, &args, action)?;

    tournament.save(&args.file)?;
    report(&tournament, &update, was_active);

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn apply_result(
    tournament: &mut Tournament,
    args: &ResultArgs,
    action: Action,
) -> Result<LedgerUpdate> {
    let winner = resolve_winner(tournament, &args.winner)?;

    let update = match action {
        Action::Record => tournament.record_result(args.match_number, &winner),
        Action::Edit => tournament.edit_result(args.match_number, &winner),
    };

    update.with_context(|| format!("Cannot update match {}", args.match_number))
}

fn resolve_winner(tournament: &Tournament, key: &str) -> Result<PlayerId> {
    tournament
        .find_player(key)
        .map(|p| p.id.clone())
        .with_context(|| format!("No player named {:?} in '{}'", key, tournament.name))
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn report(tournament: &Tournament, update: &LedgerUpdate, was_active: bool) {
    println!("{}", describe_fixture(tournament, &update.fixture));
    for player in [&update.winner, &update.loser] {
        println!(
            "  {:<16} {:>3} pts  {}W {}L ({} played)",
            player.name, player.points, player.won, player.lost, player.played
        );
    }

    if was_active && tournament.status == TournamentStatus::Completed {
        println!("\nAll matches have been played. '{}' is complete.", tournament.name);
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use league_core::Roster;
    use league_tournament::TournamentConfig;

    fn tournament() -> Tournament {
        let roster = Roster::from_names(["Ann", "Ben", "Cat"]).unwrap();
        Tournament::create(&TournamentConfig::league("T"), roster).unwrap()
    }

    fn args(match_number: u32, winner: &str) -> ResultArgs {
        ResultArgs {
            file: PathBuf::from("unused.json"),
            match_number,
            winner: winner.to_string(),
        }
    }

    #[test]
    fn test_resolve_winner_by_name_or_id() {
        let t = tournament();
        assert_eq!(resolve_winner(&t, "ben").unwrap(), PlayerId::new("p2"));
        assert_eq!(resolve_winner(&t, "p3").unwrap(), PlayerId::new("p3"));
        assert!(resolve_winner(&t, "Dan").is_err());
    }

    #[test]
    fn test_record_then_edit() {
        let mut t = tournament();

        let update = apply_result(&mut t, &args(1, "Ann"), Action::Record).unwrap();
        assert_eq!(update.winner.name, "Ann");
        assert_eq!(update.winner.points, 3);

        let update = apply_result(&mut t, &args(1, "Ben"), Action::Edit).unwrap();
        assert_eq!(update.winner.name, "Ben");
        assert_eq!(update.loser.points, 0);
    }

    #[test]
    fn test_record_twice_is_rejected() {
        let mut t = tournament();
        apply_result(&mut t, &args(1, "Ann"), Action::Record).unwrap();

        let err = apply_result(&mut t, &args(1, "Ben"), Action::Record).unwrap_err();
        assert!(err.to_string().contains("Cannot update match 1"));
        assert_eq!(t.find_player("Ann").unwrap().points, 3);
    }

    #[test]
    fn test_non_participant_winner() {
        let mut t = tournament();
        // Match 1 is Ann vs Ben
        assert!(apply_result(&mut t, &args(1, "Cat"), Action::Record).is_err());
    }
}
