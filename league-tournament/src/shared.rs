//! Shared tournament - one lock per tournament for concurrent result entry
//!
//! Every result call runs its lookup, validation and counter updates under
//! the write lock, so two calls touching the same fixture or the same
//! player can never interleave.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use league_core::{PlayerId, Result};

use crate::ledger::LedgerUpdate;
use crate::standings::Standing;
use crate::tournament::Tournament;

/// A tournament that can be updated from several threads
pub struct SharedTournament {
    inner: RwLock<Tournament>,
}

impl SharedTournament {
    pub fn new(tournament: Tournament) -> Self {
        Self {
            inner: RwLock::new(tournament),
        }
    }

    pub fn record_result(&self, match_number: u32, winner: &PlayerId) -> Result<LedgerUpdate> {
        self.write().record_result(match_number, winner)
    }

    pub fn edit_result(&self, match_number: u32, winner: &PlayerId) -> Result<LedgerUpdate> {
        self.write().edit_result(match_number, winner)
    }

    pub fn standings(&self) -> Vec<Standing> {
        self.read().standings()
    }

    /// A consistent copy of the whole tournament
    pub fn snapshot(&self) -> Tournament {
        self.read().clone()
    }

    pub fn into_inner(self) -> Tournament {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    // Every mutation validates before it writes, so state behind a poisoned
    // lock is still whole.
    fn read(&self) -> RwLockReadGuard<'_, Tournament> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tournament> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Tournament> for SharedTournament {
    fn from(tournament: Tournament) -> Self {
        Self::new(tournament)
    }
}
