//! New command - register players and generate the fixture list
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: build_roster(), create_tournament(), save_tournament()
//! - Level 3: (delegated to league-tournament crate)
//! - Level 4: output path validation

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use league_core::Roster;
use league_tournament::{Tournament, TournamentConfig};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct CreateArgs {
    /// Tournament name
    #[arg(long)]
    pub name: String,

    /// Player name; repeat once per player, in seeding order
    #[arg(long = "player", value_name = "NAME", required = true)]
    pub players: Vec<String>,

    /// Play each pairing once instead of home and away
    #[arg(long)]
    pub single_leg: bool,

    /// Where to write the tournament file
    #[arg(long, value_name = "FILE", default_value = "league.json")]
    pub out: PathBuf,

    /// Overwrite an existing tournament file
    #[arg(long)]
    pub force: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run new command
///
/// 1. Register players
/// 2. Create the tournament (schedules fixtures)
/// 3. Save it
pub fn run(args: CreateArgs) -> Result<()> {
    check_output(&args.out, args.force)?;

    let roster = build_roster(&args.players)?;
    let tournament = create_tournament(&args, roster)?;

    tournament.save(&args.out)?;
    print_summary(&tournament, &args.out);

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn build_roster(names: &[String]) -> Result<Roster> {
    let mut roster = Roster::new();
    for name in names {
        roster
            .add_player(name)
            .with_context(|| format!("Cannot register player {:?}", name))?;
    }
    Ok(roster)
}

fn create_tournament(args: &CreateArgs, roster: Roster) -> Result<Tournament> {
    let config = TournamentConfig::league(args.name.trim()).with_home_away(!args.single_leg);

    tracing::info!(
        "Scheduling '{}': {} players, {} fixtures expected",
        config.name,
        roster.len(),
        roster.expected_fixtures(config.home_away)
    );

    Tournament::create(&config, roster).context("Failed to create tournament")
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn check_output(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists; pass --force to overwrite it",
            path.display()
        );
    }
    Ok(())
}

fn print_summary(tournament: &Tournament, path: &Path) {
    println!("Created '{}'", tournament.name);
    println!("Players:  {}", tournament.players().len());
    println!(
        "Fixtures: {} ({})",
        tournament.fixtures().len(),
        if tournament.home_away() {
            "home and away"
        } else {
            "single leg"
        }
    );
    println!("Saved to {}", path.display());
}

// ============================================================================
// TESTS
// ============================================================================
