//! Fairness analysis - how evenly a schedule spreads rest time
//!
//! Level 2 - Phases (survey) and Level 3 - Steps (analysis)

use league_core::{Fixture, Player, PlayerId, Result};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::scheduler::generate_schedule;

/// Rest profile of one player across a schedule
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerRest {
    pub player: PlayerId,
    pub appearances: usize,
    pub home: usize,
    pub away: usize,
    /// Match number of the first appearance
    pub first_match: u32,
    /// Smallest distance between consecutive appearances (None if < 2 games)
    pub min_gap: Option<u32>,
    pub max_gap: Option<u32>,
    /// Appearances directly following the previous one
    pub back_to_back: usize,
}

impl PlayerRest {
    /// Difference between the longest and shortest rest
    pub fn spread(&self) -> u32 {
        match (self.min_gap, self.max_gap) {
            (Some(min), Some(max)) => max - min,
            _ => 0,
        }
    }
}

/// Rest profile of a whole schedule
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FairnessReport {
    pub fixtures: usize,
    pub players: Vec<PlayerRest>,
}

impl FairnessReport {
    /// Shortest rest any player gets
    pub fn min_gap(&self) -> Option<u32> {
        self.players.iter().filter_map(|p| p.min_gap).min()
    }

    /// Longest wait any player has between games
    pub fn max_gap(&self) -> Option<u32> {
        self.players.iter().filter_map(|p| p.max_gap).max()
    }

    pub fn back_to_back(&self) -> usize {
        self.players.iter().map(|p| p.back_to_back).sum()
    }

    /// Largest per-player difference between longest and shortest rest
    pub fn max_spread(&self) -> u32 {
        self.players.iter().map(PlayerRest::spread).max().unwrap_or(0)
    }

    pub fn player(&self, id: &PlayerId) -> Option<&PlayerRest> {
        self.players.iter().find(|p| p.player == *id)
    }
}

/// Fairness of the schedule for one roster size
#[derive(Clone, Debug, Serialize)]
pub struct SurveyRow {
    pub players: usize,
    pub home_away: bool,
    pub report: FairnessReport,
}

// ============================================================================
// Level 2 - Phases
// ============================================================================

/// Schedule and analyze every roster size in `sizes`, in parallel.
///
/// Rows come back in the order of `sizes`.
pub fn survey(sizes: &[usize], home_away: bool) -> Result<Vec<SurveyRow>> {
    sizes
        .par_iter()
        .map(|&n| {
            let players = placeholder_roster(n);
            let fixtures = generate_schedule(&players, home_away)?;
            Ok(SurveyRow {
                players: n,
                home_away,
                report: analyze(&fixtures),
            })
        })
        .collect()
}

// ============================================================================
// Level 3 - Steps
// ============================================================================

/// Measure rest gaps in an ordered schedule.
///
/// Players are reported in order of first appearance.
pub fn analyze(fixtures: &[Fixture]) -> FairnessReport {
    let mut order: Vec<PlayerId> = Vec::new();
    let mut tallies: FxHashMap<PlayerId, Tally> = FxHashMap::default();

    for fixture in fixtures {
        for (id, is_home) in [(&fixture.home, true), (&fixture.away, false)] {
            let tally = tallies.entry(id.clone()).or_insert_with(|| {
                order.push(id.clone());
                Tally::default()
            });
            tally.observe(fixture.match_number, is_home);
        }
    }

    let players = order
        .into_iter()
        .filter_map(|id| tallies.remove(&id).map(|t| t.into_rest(id)))
        .collect();

    FairnessReport {
        fixtures: fixtures.len(),
        players,
    }
}

#[derive(Default)]
struct Tally {
    first: Option<u32>,
    last: Option<u32>,
    appearances: usize,
    home: usize,
    min_gap: Option<u32>,
    max_gap: Option<u32>,
    back_to_back: usize,
}

impl Tally {
    fn observe(&mut self, match_number: u32, is_home: bool) {
        if let Some(last) = self.last {
            let gap = match_number.saturating_sub(last);
            self.min_gap = Some(self.min_gap.map_or(gap, |g| g.min(gap)));
            self.max_gap = Some(self.max_gap.map_or(gap, |g| g.max(gap)));
            if gap == 1 {
                self.back_to_back += 1;
            }
        }
        self.first.get_or_insert(match_number);
        self.last = Some(match_number);
        self.appearances += 1;
        if is_home {
            self.home += 1;
        }
    }

    fn into_rest(self, player: PlayerId) -> PlayerRest {
        PlayerRest {
            player,
            appearances: self.appearances,
            home: self.home,
            away: self.appearances - self.home,
            first_match: self.first.unwrap_or(0),
            min_gap: self.min_gap,
            max_gap: self.max_gap,
            back_to_back: self.back_to_back,
        }
    }
}

fn placeholder_roster(n: usize) -> Vec<Player> {
    (1..=n)
        .map(|i| Player::new(format!("p{}", i), format!("Player {}", i)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(n: u32, home: &str, away: &str) -> Fixture {
        Fixture::new(n, home.into(), away.into())
    }

    #[test]
    fn test_analyze_gaps() {
        let fixtures = vec![
            fixture(1, "A", "B"),
            fixture(2, "A", "C"),
            fixture(3, "B", "C"),
            fixture(4, "C", "A"),
        ];
        let report = analyze(&fixtures);

        assert_eq!(report.fixtures, 4);
        let ids: Vec<&str> = report.players.iter().map(|p| p.player.as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);

        let a = report.player(&"A".into()).unwrap();
        assert_eq!(a.appearances, 3);
        assert_eq!((a.home, a.away), (2, 1));
        assert_eq!(a.first_match, 1);
        assert_eq!(a.min_gap, Some(1));
        assert_eq!(a.max_gap, Some(2));
        assert_eq!(a.back_to_back, 1);
        assert_eq!(a.spread(), 1);

        let c = report.player(&"C".into()).unwrap();
        assert_eq!(c.first_match, 2);
        assert_eq!(c.back_to_back, 2);

        assert_eq!(report.min_gap(), Some(1));
        assert_eq!(report.max_gap(), Some(2));
        assert_eq!(report.back_to_back(), 3);
    }

    #[test]
    fn test_analyze_single_appearance() {
        let report = analyze(&[fixture(1, "A", "B")]);
        let a = report.player(&"A".into()).unwrap();
        assert_eq!(a.min_gap, None);
        assert_eq!(a.spread(), 0);
        assert_eq!(report.min_gap(), None);
    }

    #[test]
    fn test_analyze_empty() {
        let report = analyze(&[]);
        assert_eq!(report.fixtures, 0);
        assert!(report.players.is_empty());
        assert_eq!(report.max_spread(), 0);
    }

    #[test]
    fn test_greedy_beats_lexicographic_order() {
        let players = placeholder_roster(8);
        let greedy = analyze(&generate_schedule(&players, false).unwrap());

        // Naive nested-loop order: p1 plays its 7 games in a row
        let mut naive = Vec::new();
        for i in 0..players.len() {
            for j in (i + 1)..players.len() {
                naive.push(Fixture::new(
                    naive.len() as u32 + 1,
                    players[i].id.clone(),
                    players[j].id.clone(),
                ));
            }
        }
        let naive = analyze(&naive);

        assert_eq!(greedy.back_to_back(), 0);
        assert_eq!(greedy.min_gap(), Some(2));
        assert!(naive.back_to_back() > 0);
        assert_eq!(naive.min_gap(), Some(1));
    }

    #[test]
    fn test_home_away_balance() {
        let report = analyze(&generate_schedule(&placeholder_roster(6), true).unwrap());
        for rest in &report.players {
            assert_eq!(rest.appearances, 10);
            assert_eq!(rest.home, 5);
            assert_eq!(rest.away, 5);
        }
    }

    #[test]
    fn test_survey_keeps_order() {
        let rows = survey(&[6, 3, 10], true).unwrap();
        let sizes: Vec<usize> = rows.iter().map(|r| r.players).collect();
        assert_eq!(sizes, vec![6, 3, 10]);
        assert_eq!(rows[0].report.fixtures, 30);
        assert_eq!(rows[1].report.fixtures, 6);
        assert!(rows.iter().all(|r| r.home_away));
    }

    #[test]
    fn test_survey_rejects_tiny_roster() {
        assert!(survey(&[4, 1], false).is_err());
    }
}
