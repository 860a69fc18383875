//! Schedule command - list fixtures in play order

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use league_core::{Fixture, PlayerId};
use league_tournament::Tournament;

#[derive(Args)]
pub struct ScheduleArgs {
    /// Tournament file
    #[arg(long, value_name = "FILE", default_value = "league.json")]
    pub file: PathBuf,

    /// Only show fixtures still to be played
    #[arg(long)]
    pub upcoming: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run schedule command
pub fn run(args: ScheduleArgs) -> Result<()> {
    let tournament = Tournament::load(&args.file)?;

    let fixtures: Vec<&Fixture> = if args.upcoming {
        tournament.upcoming().collect()
    } else {
        tournament.fixtures().iter().collect()
    };

    if args.json {
        print_json(&tournament, &fixtures)?;
    } else {
        print_text(&tournament, &fixtures);
    }

    Ok(())
}

/// Display name for a player id, falling back to the id itself
pub(crate) fn player_name<'a>(tournament: &'a Tournament, id: &'a PlayerId) -> &'a str {
    tournament
        .player(id)
        .map(|p| p.name.as_str())
        .unwrap_or(id.as_str())
}

/// One-line description of a fixture and its result
pub(crate) fn describe_fixture(tournament: &Tournament, fixture: &Fixture) -> String {
    let home = player_name(tournament, &fixture.home);
    let away = player_name(tournament, &fixture.away);
    let line = format!("#{:<3} {} vs {}", fixture.match_number, home, away);

    match &fixture.winner {
        Some(winner) => format!("{}  ({} won)", line, player_name(tournament, winner)),
        None => line,
    }
}

fn print_text(tournament: &Tournament, fixtures: &[&Fixture]) {
    let (done, total) = tournament.progress();
    println!("\n=== {} ===", tournament.name);
    println!("Played {} of {} fixtures", done, total);
    println!();

    if fixtures.is_empty() {
        println!("All matches have been played.");
        return;
    }

    for fixture in fixtures {
        println!("  {}", describe_fixture(tournament, fixture));
    }
}

fn print_json(tournament: &Tournament, fixtures: &[&Fixture]) -> Result<()> {
    #[derive(Serialize)]
    struct JsonFixture<'a> {
        match_number: u32,
        home: &'a str,
        away: &'a str,
        completed: bool,
        winner: Option<&'a str>,
    }

    let rows: Vec<JsonFixture> = fixtures
        .iter()
        .map(|f| JsonFixture {
            match_number: f.match_number,
            home: player_name(tournament, &f.home),
            away: player_name(tournament, &f.away),
            completed: f.completed,
            winner: f.winner.as_ref().map(|w| player_name(tournament, w)),
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use league_core::Roster;
    use league_tournament::TournamentConfig;

    fn tournament() -> Tournament {
        let roster = Roster::from_names(["Ann", "Ben", "Cat"]).unwrap();
        Tournament::create(&TournamentConfig::league("T").single_leg(), roster).unwrap()
    }

    #[test]
    fn test_describe_scheduled_fixture() {
        let t = tournament();
        let line = describe_fixture(&t, t.fixture(1).unwrap());
        assert_eq!(line, "#1   Ann vs Ben");
    }

    #[test]
    fn test_describe_completed_fixture() {
        let mut t = tournament();
        let away = t.fixture(1).unwrap().away.clone();
        t.record_result(1, &away).unwrap();
        let line = describe_fixture(&t, t.fixture(1).unwrap());
        assert_eq!(line, "#1   Ann vs Ben  (Ben won)");
    }

    #[test]
    fn test_player_name_falls_back_to_id() {
        let t = tournament();
        let ghost = PlayerId::new("p42");
        assert_eq!(player_name(&t, &ghost), "p42");
    }
}
