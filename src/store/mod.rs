//! Persistent tournament state behind a trait, so every operation receives its
//! store explicitly.
//!
//! Logical record-sets: players (id, name), scores (player id, points) and
//! rounds (player id, matches). Each method is atomic: it either applies all
//! of its writes or none.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::models::{PlayerId, Standing};

/// Failure inside a store implementation.
#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    /// Stored data that cannot be represented (e.g. a negative counter).
    Corrupt(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Sqlite(e) => write!(f, "sqlite: {}", e),
            StoreError::Corrupt(msg) => write!(f, "corrupt data: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Sqlite(e) => Some(e),
            StoreError::Corrupt(_) => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::Sqlite(e)
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Operations the tournament core issues against its store.
pub trait TournamentStore {
    /// Insert a player together with zeroed score and match-count records.
    /// Returns the assigned id.
    fn insert_player(&mut self, name: &str) -> StoreResult<PlayerId>;

    /// Zero every player's points and match count. Players are kept.
    fn zero_scores(&mut self) -> StoreResult<()>;

    /// Delete all players and their records and restart id assignment.
    fn delete_players(&mut self) -> StoreResult<()>;

    fn count_players(&self) -> StoreResult<usize>;

    fn contains_player(&self, id: PlayerId) -> StoreResult<bool>;

    /// Add a point to the winner and a played match to both players.
    /// Returns `false`, with nothing applied, if either player is missing.
    fn record_match(&mut self, winner: PlayerId, loser: PlayerId) -> StoreResult<bool>;

    /// Every player with their record, points descending. Order among equal
    /// points is store-defined.
    fn standings(&self) -> StoreResult<Vec<Standing>>;
}
