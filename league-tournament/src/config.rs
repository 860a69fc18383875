//! Configuration types for tournament creation
//!
//! Level 4 - Utilities and configuration

use league_core::TournamentKind;
use serde::{Deserialize, Serialize};

/// Tournament configuration, fixed once the tournament is created
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentConfig {
    /// Display name
    pub name: String,
    /// Tournament format
    pub kind: TournamentKind,
    /// Play every pairing twice, once at home and once away
    pub home_away: bool,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            name: "League".to_string(),
            kind: TournamentKind::League,
            home_away: true,
        }
    }
}

impl TournamentConfig {
    /// Create league config with the given name
    pub fn league(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set tournament format
    pub fn with_kind(mut self, kind: TournamentKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set whether pairings are played home and away
    pub fn with_home_away(mut self, home_away: bool) -> Self {
        self.home_away = home_away;
        self
    }

    /// Play every pairing once
    pub fn single_leg(self) -> Self {
        self.with_home_away(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = TournamentConfig::default();
        assert_eq!(config.kind, TournamentKind::League);
        assert!(config.home_away);
    }

    #[test]
    fn test_config_league() {
        let config = TournamentConfig::league("Office Darts");
        assert_eq!(config.name, "Office Darts");
        assert_eq!(config.kind, TournamentKind::League);
    }

    #[test]
    fn test_config_single_leg() {
        let config = TournamentConfig::league("Chess").single_leg();
        assert!(!config.home_away);
    }

    #[test]
    fn test_config_with_kind() {
        let config = TournamentConfig::default().with_kind(TournamentKind::Cup);
        assert_eq!(config.kind, TournamentKind::Cup);
    }
}
