//! League CLI - Command-line interface
//!
//! Commands:
//! - new: Register players and generate the fixture list
//! - schedule: List fixtures in play order
//! - record / edit: Enter or correct a match result
//! - complete: Close the league early
//! - standings: Show the league table
//! - fairness: Survey rest distribution across roster sizes

mod complete;
mod create;
mod fairness;
mod results;
mod schedule;
mod standings;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "league")]
#[command(about = "Round-robin league scheduler and results ledger")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a league and generate its fixtures
    New(create::CreateArgs),
    /// List fixtures in play order
    Schedule(schedule::ScheduleArgs),
    /// Record the winner of a match
    Record(results::ResultArgs),
    /// Correct the winner of a completed match
    Edit(results::ResultArgs),
    /// Close the league; only corrections are accepted afterwards
    Complete(complete::CompleteArgs),
    /// Show the league table
    Standings(standings::StandingsArgs),
    /// Survey schedule fairness across roster sizes
    Fairness(fairness::FairnessArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::New(args) => create::run(args),
        Commands::Schedule(args) => schedule::run(args),
        Commands::Record(args) => results::run(args, results::Action::Record),
        Commands::Edit(args) => results::run(args, results::Action::Edit),
        Commands::Complete(args) => complete::run(args),
        Commands::Standings(args) => standings::run(args),
        Commands::Fairness(args) => fairness::run(args),
    }
}
