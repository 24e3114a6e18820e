//! In-process store. Holds all records in a vector in registration order.

use crate::models::{Player, PlayerId, Standing};
use crate::store::{StoreResult, TournamentStore};

const FIRST_ID: PlayerId = 1;

#[derive(Clone, Debug)]
pub struct MemoryStore {
    records: Vec<Standing>,
    next_id: PlayerId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: FIRST_ID,
        }
    }

    fn get_mut(&mut self, id: PlayerId) -> Option<&mut Standing> {
        self.records.iter_mut().find(|r| r.id == id)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TournamentStore for MemoryStore {
    fn insert_player(&mut self, name: &str) -> StoreResult<PlayerId> {
        let id = self.next_id;
        self.next_id += 1;
        self.records.push(Standing::fresh(&Player::new(id, name)));
        Ok(id)
    }

    fn zero_scores(&mut self) -> StoreResult<()> {
        for r in &mut self.records {
            r.wins = 0;
            r.matches = 0;
        }
        Ok(())
    }

    fn delete_players(&mut self) -> StoreResult<()> {
        self.records.clear();
        self.next_id = FIRST_ID;
        Ok(())
    }

    fn count_players(&self) -> StoreResult<usize> {
        Ok(self.records.len())
    }

    fn contains_player(&self, id: PlayerId) -> StoreResult<bool> {
        Ok(self.records.iter().any(|r| r.id == id))
    }

    fn record_match(&mut self, winner: PlayerId, loser: PlayerId) -> StoreResult<bool> {
        // Check both before touching either so a missing loser leaves the winner alone.
        if !self.contains_player(winner)? || !self.contains_player(loser)? {
            return Ok(false);
        }
        if let Some(w) = self.get_mut(winner) {
            w.wins += 1;
            w.matches += 1;
        }
        if let Some(l) = self.get_mut(loser) {
            l.matches += 1;
        }
        Ok(true)
    }

    fn standings(&self) -> StoreResult<Vec<Standing>> {
        let mut rows = self.records.clone();
        rows.sort_by(|a, b| b.wins.cmp(&a.wins));
        Ok(rows)
    }
}
