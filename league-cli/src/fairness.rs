//! Fairness command - survey rest distribution across roster sizes
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: roster_sizes()
//! - Level 3: (delegated to league_tournament::survey)
//! - Level 4: print_text_results(), print_json_results()

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use league_tournament::{survey, SurveyRow};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct FairnessArgs {
    /// Smallest roster size to schedule
    #[arg(long, default_value = "3")]
    pub min_players: usize,

    /// Largest roster size to schedule
    #[arg(long, default_value = "16")]
    pub max_players: usize,

    /// Play each pairing once instead of home and away
    #[arg(long)]
    pub single_leg: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run fairness command
pub fn run(args: FairnessArgs) -> Result<()> {
    let sizes = roster_sizes(&args)?;

    tracing::info!(
        "Surveying {} roster sizes ({}..={}, home_away={})",
        sizes.len(),
        args.min_players,
        args.max_players,
        !args.single_leg
    );

    let rows = survey(&sizes, !args.single_leg).context("Fairness survey failed")?;

    if args.json {
        print_json_results(&rows)?;
    } else {
        print_text_results(&rows);
    }

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn roster_sizes(args: &FairnessArgs) -> Result<Vec<usize>> {
    if args.min_players < 2 {
        anyhow::bail!("--min-players must be at least 2");
    }
    if args.max_players < args.min_players {
        anyhow::bail!(
            "--max-players ({}) is below --min-players ({})",
            args.max_players,
            args.min_players
        );
    }
    Ok((args.min_players..=args.max_players).collect())
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn print_text_results(rows: &[SurveyRow]) {
    println!("\n=== Schedule Fairness ===");
    println!(
        "{:>7} {:>8} {:>8} {:>8} {:>8} {:>7}",
        "Players", "Fixtures", "Min gap", "Max gap", "Back2bk", "Spread"
    );

    for row in rows {
        let report = &row.report;
        println!(
            "{:>7} {:>8} {:>8} {:>8} {:>8} {:>7}",
            row.players,
            report.fixtures,
            format_gap(report.min_gap()),
            format_gap(report.max_gap()),
            report.back_to_back(),
            report.max_spread()
        );
    }
}

fn print_json_results(rows: &[SurveyRow]) -> Result<()> {
    #[derive(Serialize)]
    struct JsonRow {
        players: usize,
        home_away: bool,
        fixtures: usize,
        min_gap: Option<u32>,
        max_gap: Option<u32>,
        back_to_back: usize,
        max_spread: u32,
    }

    let output: Vec<JsonRow> = rows
        .iter()
        .map(|r| JsonRow {
            players: r.players,
            home_away: r.home_away,
            fixtures: r.report.fixtures,
            min_gap: r.report.min_gap(),
            max_gap: r.report.max_gap(),
            back_to_back: r.report.back_to_back(),
            max_spread: r.report.max_spread(),
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn format_gap(gap: Option<u32>) -> String {
    gap.map_or_else(|| "-".to_string(), |g| g.to_string())
}

// ============================================================================
// TESTS
// ============================================================================
