//! Complete command - close a league before every fixture is played

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use league_tournament::{Tournament, TournamentStatus};

#[derive(Args)]
pub struct CompleteArgs {
    /// Tournament file
    #[arg(long, value_name = "FILE", default_value = "league.json")]
    pub file: PathBuf,
}

/// Run complete command
pub fn run(args: CompleteArgs) -> Result<()> {
    let mut tournament = Tournament::load(&args.file)?;

    if !close(&mut tournament) {
        println!("'{}' is already complete.", tournament.name);
        return Ok(());
    }

    tournament.save(&args.file)?;

    let (done, total) = tournament.progress();
    println!(
        "'{}' marked complete with {} of {} fixtures played.",
        tournament.name, done, total
    );
    if done < total {
        println!("Remaining fixtures can no longer be recorded; results can still be edited.");
    }

    Ok(())
}

/// Close the tournament; false if it was already closed
fn close(tournament: &mut Tournament) -> bool {
    if tournament.status == TournamentStatus::Completed {
        return false;
    }
    tournament.mark_completed();
    true
}
