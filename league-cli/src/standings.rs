//! Standings command - show the league table

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use league_tournament::{Standing, Tournament};

#[derive(Args)]
pub struct StandingsArgs {
    /// Tournament file
    #[arg(long, value_name = "FILE", default_value = "league.json")]
    pub file: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run standings command
pub fn run(args: StandingsArgs) -> Result<()> {
    let tournament = Tournament::load(&args.file)?;
    let standings = tournament.standings();

    if args.json {
        print_json(&standings)?;
    } else {
        print_text(&tournament, &standings);
    }

    Ok(())
}

fn print_text(tournament: &Tournament, standings: &[Standing]) {
    let (done, total) = tournament.progress();
    println!("\n=== {} ({}/{} played) ===", tournament.name, done, total);
    println!(
        "{:>3}  {:<16} {:>4} {:>4} {:>4} {:>4} {:>7}",
        "#", "Player", "Pts", "P", "W", "L", "Win%"
    );

    for row in standings {
        println!("{}", format_row(row));
    }
}

fn format_row(row: &Standing) -> String {
    let p = &row.player;
    format!(
        "{:>3}  {:<16} {:>4} {:>4} {:>4} {:>4} {:>6.1}%",
        row.position,
        p.name,
        p.points,
        p.played,
        p.won,
        p.lost,
        row.win_percentage()
    )
}

fn print_json(standings: &[Standing]) -> Result<()> {
    #[derive(Serialize)]
    struct JsonRow<'a> {
        position: usize,
        id: &'a str,
        name: &'a str,
        points: u32,
        played: u32,
        won: u32,
        lost: u32,
        win_percentage: f32,
    }

    let rows: Vec<JsonRow> = standings
        .iter()
        .map(|s| JsonRow {
            position: s.position,
            id: s.player.id.as_str(),
            name: &s.player.name,
            points: s.player.points,
            played: s.player.played,
            won: s.player.won,
            lost: s.player.lost,
            win_percentage: s.win_percentage(),
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}
