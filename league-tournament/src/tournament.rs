//! Tournament - roster, schedule and results of one league
//!
//! Level 1 - Orchestration
//!
//! Players and fixtures are frozen at creation; afterwards they change only
//! through `record_result` and `edit_result`.

use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use league_core::{
    names_match, Fixture, LeagueError, Player, PlayerId, Result, Roster, TournamentKind,
};
use serde::{Deserialize, Serialize};

use crate::config::TournamentConfig;
use crate::ledger::{self, LedgerUpdate};
use crate::scheduler::generate_schedule;
use crate::standings::{rank, Standing};

/// Tournament lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TournamentStatus {
    Active,
    Completed,
}

/// A scheduled league with its running results
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub name: String,
    pub kind: TournamentKind,
    pub status: TournamentStatus,
    home_away: bool,
    players: Vec<Player>,
    fixtures: Vec<Fixture>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tournament {
    /// Create a tournament from a finished roster.
    ///
    /// Checks the roster against the format's size policy, then generates
    /// the full fixture list.
    pub fn create(config: &TournamentConfig, roster: Roster) -> Result<Self> {
        roster.check_ready(config.kind)?;
        if config.kind != TournamentKind::League {
            return Err(LeagueError::UnsupportedFormat(config.kind.name().to_string()));
        }

        let players = roster.into_players();
        let fixtures = generate_schedule(&players, config.home_away)?;
        let now = Utc::now();

        tracing::info!(
            "Created {} '{}': {} players, {} fixtures",
            config.kind.name(),
            config.name,
            players.len(),
            fixtures.len()
        );

        Ok(Self {
            name: config.name.clone(),
            kind: config.kind,
            status: TournamentStatus::Active,
            home_away: config.home_away,
            players,
            fixtures,
            created_at: now,
            updated_at: now,
        })
    }

    /// Record the winner of a scheduled fixture
    pub fn record_result(&mut self, match_number: u32, winner: &PlayerId) -> Result<LedgerUpdate> {
        let index = self.fixture_index(match_number)?;
        if self.status == TournamentStatus::Completed && !self.fixtures[index].completed {
            return Err(LeagueError::TournamentClosed);
        }

        let update = ledger::record_result(&mut self.fixtures[index], &mut self.players, winner)?;
        self.updated_at = Utc::now();

        if self.status == TournamentStatus::Active && self.is_complete() {
            self.status = TournamentStatus::Completed;
            tracing::info!("All {} fixtures played, '{}' completed", self.fixtures.len(), self.name);
        }

        Ok(update)
    }

    /// Correct the winner of a completed fixture
    pub fn edit_result(&mut self, match_number: u32, winner: &PlayerId) -> Result<LedgerUpdate> {
        let index = self.fixture_index(match_number)?;
        let update = ledger::edit_result(&mut self.fixtures[index], &mut self.players, winner)?;
        self.updated_at = Utc::now();
        Ok(update)
    }

    /// Close the tournament before every fixture is played
    pub fn mark_completed(&mut self) {
        if self.status != TournamentStatus::Completed {
            self.status = TournamentStatus::Completed;
            self.updated_at = Utc::now();
            tracing::info!("'{}' marked completed", self.name);
        }
    }

    pub fn home_away(&self) -> bool {
        self.home_away
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == *id)
    }

    /// Look a player up by id, falling back to a case-insensitive name match
    pub fn find_player(&self, key: &str) -> Option<&Player> {
        let key = key.trim();
        self.players
            .iter()
            .find(|p| p.id.as_str() == key)
            .or_else(|| self.players.iter().find(|p| names_match(&p.name, key)))
    }

    pub fn fixture(&self, match_number: u32) -> Option<&Fixture> {
        self.fixtures.iter().find(|f| f.match_number == match_number)
    }

    /// Fixtures still to be played, in play order
    pub fn upcoming(&self) -> impl Iterator<Item = &Fixture> {
        self.fixtures.iter().filter(|f| !f.completed)
    }

    /// Fixtures with a result, in play order
    pub fn completed(&self) -> impl Iterator<Item = &Fixture> {
        self.fixtures.iter().filter(|f| f.completed)
    }

    pub fn next_fixture(&self) -> Option<&Fixture> {
        self.upcoming().next()
    }

    /// (completed fixtures, total fixtures)
    pub fn progress(&self) -> (usize, usize) {
        (self.completed().count(), self.fixtures.len())
    }

    pub fn is_complete(&self) -> bool {
        !self.fixtures.is_empty() && self.fixtures.iter().all(|f| f.completed)
    }

    pub fn standings(&self) -> Vec<Standing> {
        rank(&self.players)
    }

    /// Whether player counters agree with the recorded results
    pub fn is_balanced(&self) -> bool {
        ledger::is_balanced(&self.players, &self.fixtures)
    }

    /// Load a tournament snapshot from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let tournament: Tournament = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        if !tournament.is_balanced() {
            tracing::warn!(
                "Counters in {} do not match the recorded results",
                path.display()
            );
        }

        Ok(tournament)
    }

    /// Save a tournament snapshot as JSON
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    fn fixture_index(&self, match_number: u32) -> Result<usize> {
        self.fixtures
            .iter()
            .position(|f| f.match_number == match_number)
            .ok_or(LeagueError::UnknownFixture(match_number))
    }
}
