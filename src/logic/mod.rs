//! Tournament business logic: registration, standings, pairings, match recording, resets.

mod pairing;
mod recorder;
mod registration;
mod reset;
mod standings;

pub use pairing::{recommended_rounds, swiss_pairings};
pub use recorder::report_match;
pub use registration::{count_players, register_player, tournament_state};
pub use reset::{clear_matches, clear_players};
pub use standings::{player_standings, top_players, CHAMPION_COUNT};
