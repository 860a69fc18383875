//! Result ledger - applies match outcomes to player counters
//!
//! Level 3 - Steps
//!
//! Each call validates the fixture, the winner and both participants before
//! touching any counter, so an error leaves every value as it was.

use league_core::{Fixture, LeagueError, Player, PlayerId, Result, POINTS_PER_WIN};
use serde::Serialize;

/// What a successful ledger call changed, for the caller to persist
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LedgerUpdate {
    pub fixture: Fixture,
    pub winner: Player,
    pub loser: Player,
}

/// Record the first result of a fixture.
///
/// Fails with `AlreadyCompleted` if the fixture already has a result and
/// with `InvalidWinner` if `winner` did not play in it.
pub fn record_result(
    fixture: &mut Fixture,
    players: &mut [Player],
    winner: &PlayerId,
) -> Result<LedgerUpdate> {
    if fixture.completed {
        return Err(LeagueError::AlreadyCompleted {
            match_number: fixture.match_number,
        });
    }
    let (winner_idx, loser_idx) = locate_participants(fixture, players, winner)?;

    {
        let (w, l) = pair_mut(players, winner_idx, loser_idx);
        w.points += POINTS_PER_WIN;
        w.won += 1;
        w.played += 1;
        l.lost += 1;
        l.played += 1;
    }

    fixture.completed = true;
    fixture.winner = Some(winner.clone());

    tracing::info!(
        "Match {}: {} beat {}",
        fixture.match_number,
        players[winner_idx].name,
        players[loser_idx].name
    );

    Ok(snapshot(fixture, players, winner_idx, loser_idx))
}

/// Correct the result of a completed fixture.
///
/// Naming the current winner again is a no-op. Otherwise the old outcome is
/// reverted (counters floored at zero) and the new one applied; `played`
/// does not change since both participants already played the match.
/// A fixture whose stored winner is missing or not a participant fails with
/// `InconsistentFixture` instead of reverting someone else's result.
pub fn edit_result(
    fixture: &mut Fixture,
    players: &mut [Player],
    new_winner: &PlayerId,
) -> Result<LedgerUpdate> {
    if !fixture.completed {
        return Err(LeagueError::NotCompleted {
            match_number: fixture.match_number,
        });
    }
    let (winner_idx, loser_idx) = locate_participants(fixture, players, new_winner)?;
    check_recorded_winner(fixture)?;

    if fixture.winner.as_ref() == Some(new_winner) {
        tracing::debug!("Match {}: result unchanged", fixture.match_number);
        return Ok(snapshot(fixture, players, winner_idx, loser_idx));
    }

    {
        // The previous winner is the new loser and vice versa
        let (new_w, new_l) = pair_mut(players, winner_idx, loser_idx);

        new_l.points = new_l.points.saturating_sub(POINTS_PER_WIN);
        new_l.won = new_l.won.saturating_sub(1);
        new_w.lost = new_w.lost.saturating_sub(1);

        new_w.points += POINTS_PER_WIN;
        new_w.won += 1;
        new_l.lost += 1;
    }

    fixture.winner = Some(new_winner.clone());

    tracing::info!(
        "Match {}: result corrected, {} beat {}",
        fixture.match_number,
        players[winner_idx].name,
        players[loser_idx].name
    );

    Ok(snapshot(fixture, players, winner_idx, loser_idx))
}

/// Whether counters and fixtures agree: every player's derived counters
/// match, and each completed fixture produced exactly one win and one loss.
pub fn is_balanced(players: &[Player], fixtures: &[Fixture]) -> bool {
    let completed = fixtures.iter().filter(|f| f.completed).count() as u64;
    let won: u64 = players.iter().map(|p| u64::from(p.won)).sum();
    let lost: u64 = players.iter().map(|p| u64::from(p.lost)).sum();

    players.iter().all(Player::is_consistent) && won == completed && lost == completed
}

// ============================================================================
// Level 4 - Utilities
// ============================================================================

/// Indices of (winner, loser) within `players`
fn locate_participants(
    fixture: &Fixture,
    players: &[Player],
    winner: &PlayerId,
) -> Result<(usize, usize)> {
    let loser = fixture
        .opponent_of(winner)
        .ok_or_else(|| LeagueError::InvalidWinner {
            match_number: fixture.match_number,
            winner: winner.clone(),
        })?;

    if loser == winner {
        return Err(LeagueError::InconsistentFixture {
            match_number: fixture.match_number,
            reason: "a player is paired with themselves",
        });
    }

    let index_of = |id: &PlayerId| {
        players
            .iter()
            .position(|p| p.id == *id)
            .ok_or_else(|| LeagueError::UnknownPlayer(id.to_string()))
    };

    Ok((index_of(winner)?, index_of(loser)?))
}

/// A completed fixture must name one of its participants as winner before
/// that outcome can be reverted.
fn check_recorded_winner(fixture: &Fixture) -> Result<()> {
    let reason = match &fixture.winner {
        None => "completed without a winner",
        Some(w) if !fixture.involves(w) => "recorded winner did not take part",
        Some(_) => return Ok(()),
    };
    Err(LeagueError::InconsistentFixture {
        match_number: fixture.match_number,
        reason,
    })
}

/// Two distinct mutable players out of one slice
fn pair_mut(players: &mut [Player], a: usize, b: usize) -> (&mut Player, &mut Player) {
    debug_assert_ne!(a, b);
    if a < b {
        let (left, right) = players.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = players.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}

fn snapshot(fixture: &Fixture, players: &[Player], winner: usize, loser: usize) -> LedgerUpdate {
    LedgerUpdate {
        fixture: fixture.clone(),
        winner: players[winner].clone(),
        loser: players[loser].clone(),
    }
}
