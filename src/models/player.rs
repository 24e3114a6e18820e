//! Player, Standing and Pairing data structures.

use serde::{Deserialize, Serialize};

/// Unique identifier for a player, assigned by the store at registration.
pub type PlayerId = i64;

/// A registered player.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Display name; need not be unique.
    pub name: String,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// One row of the standings: a player with their cumulative record.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub matches: u32,
}

impl Standing {
    /// A freshly registered player: no wins, no matches.
    pub fn fresh(player: &Player) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            wins: 0,
            matches: 0,
        }
    }

    pub fn player(&self) -> Player {
        Player::new(self.id, self.name.clone())
    }
}

/// A matchup for the next round. Players are adjacent in the standings,
/// the higher-ranked one first.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    pub id1: PlayerId,
    pub name1: String,
    pub id2: PlayerId,
    pub name2: String,
}

impl Pairing {
    pub fn new(first: &Standing, second: &Standing) -> Self {
        Self {
            id1: first.id,
            name1: first.name.clone(),
            id2: second.id,
            name2: second.name.clone(),
        }
    }
}
