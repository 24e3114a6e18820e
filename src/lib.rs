//! Swiss-system tournament: library with models, store and business logic.

pub mod config;
pub mod logic;
pub mod models;
pub mod report;
pub mod store;

pub use config::{Config, OutputFormat};
pub use logic::{
    clear_matches, clear_players, count_players, player_standings, recommended_rounds,
    register_player, report_match, swiss_pairings, top_players, tournament_state, CHAMPION_COUNT,
};
pub use models::{Pairing, Player, PlayerId, Standing, TournamentError, TournamentState};
pub use report::{format_champions, format_standings_table, write_standings, write_standings_csv};
pub use store::{MemoryStore, SqliteStore, StoreError, StoreResult, TournamentStore};
