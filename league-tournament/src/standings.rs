//! Standings - deterministic league table ordering

use league_core::Player;
use serde::Serialize;
use std::cmp::Ordering;

/// One row of the league table
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Standing {
    /// 1-based table position
    pub position: usize,
    pub player: Player,
    /// won / played, 0.0 before the first match
    pub win_rate: f32,
}

impl Standing {
    /// Win rate as a percentage rounded to one decimal place
    pub fn win_percentage(&self) -> f32 {
        self.player.win_percentage()
    }
}

/// Rank players for display.
///
/// Order: points (desc), wins (desc), games played (asc; fewer games for
/// the same points ranks higher), then registration order.
pub fn rank(players: &[Player]) -> Vec<Standing> {
    let mut order: Vec<usize> = (0..players.len()).collect();
    order.sort_by(|&a, &b| compare(&players[a], &players[b]).then(a.cmp(&b)));

    order
        .into_iter()
        .enumerate()
        .map(|(i, idx)| Standing {
            position: i + 1,
            player: players[idx].clone(),
            win_rate: players[idx].win_rate(),
        })
        .collect()
}

fn compare(a: &Player, b: &Player) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.won.cmp(&a.won))
        .then_with(|| a.played.cmp(&b.played))
}
