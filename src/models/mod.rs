//! Data structures for the Swiss tournament: players, standings, pairings, errors.

mod player;
mod tournament;

pub use player::{Pairing, Player, PlayerId, Standing};
pub use tournament::{TournamentError, TournamentState};
