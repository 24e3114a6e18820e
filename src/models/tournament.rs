//! TournamentError and TournamentState.

use crate::models::player::PlayerId;
use crate::store::StoreError;
use serde::{Deserialize, Serialize};

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// The store could not be reached or a transaction failed.
    StorageUnavailable(String),
    /// The operation references a player id that is not registered.
    UnknownPlayer(PlayerId),
    /// Pairings were requested for an odd number of players.
    OddPlayerCount(usize),
    /// Winner and loser are the same player.
    SameCombatant(PlayerId),
    /// Registration with a blank name.
    InvalidName,
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::StorageUnavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            TournamentError::UnknownPlayer(id) => write!(f, "Player {} is not registered", id),
            TournamentError::OddPlayerCount(n) => {
                write!(f, "Cannot pair an odd number of players ({})", n)
            }
            TournamentError::SameCombatant(id) => {
                write!(f, "Player {} cannot play against themself", id)
            }
            TournamentError::InvalidName => write!(f, "Player name must not be empty"),
        }
    }
}

impl std::error::Error for TournamentError {}

impl From<StoreError> for TournamentError {
    fn from(e: StoreError) -> Self {
        TournamentError::StorageUnavailable(e.to_string())
    }
}

/// Lifecycle of a tournament's player pool.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentState {
    /// No players registered.
    #[default]
    Empty,
    /// At least one player registered; matches can be reported and rounds paired.
    Populated,
}

impl TournamentState {
    pub fn from_player_count(count: usize) -> Self {
        if count == 0 {
            TournamentState::Empty
        } else {
            TournamentState::Populated
        }
    }
}
