//! League Tournament - Fixture scheduling and result bookkeeping
//!
//! This crate provides the league engine:
//! - Fair fixture scheduling (greedy longest-wait-first)
//! - Result recording and correction against player counters
//! - Standings ordering and win rates
//! - Rest-gap fairness analysis
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: Tournament, SharedTournament (orchestration)
//! - Level 2: generate_schedule, survey (phases)
//! - Level 3: record_result, edit_result, rank, analyze (steps)
//! - Level 4: configuration

mod config;
mod fairness;
mod ledger;
mod scheduler;
mod shared;
mod standings;
mod tournament;

pub use config::TournamentConfig;
pub use fairness::{analyze, survey, FairnessReport, PlayerRest, SurveyRow};
pub use ledger::{edit_result, is_balanced, record_result, LedgerUpdate};
pub use scheduler::generate_schedule;
pub use shared::SharedTournament;
pub use standings::{rank, Standing};
pub use tournament::{Tournament, TournamentStatus};
