//! Registration: add players and inspect the size of the pool.

use crate::models::{Player, TournamentError, TournamentState};
use crate::store::TournamentStore;

/// Register a player. The store assigns the id and creates the zeroed score
/// record in the same transaction. Names are trimmed and must not be empty.
pub fn register_player<S: TournamentStore + ?Sized>(
    store: &mut S,
    name: &str,
) -> Result<Player, TournamentError> {
    let name = name.trim();
    if name.is_empty() {
        log::warn!("Rejected registration with an empty name");
        return Err(TournamentError::InvalidName);
    }
    let id = store.insert_player(name)?;
    log::info!("Registered player {} ({})", id, name);
    Ok(Player::new(id, name))
}

/// Number of players currently registered.
pub fn count_players<S: TournamentStore + ?Sized>(store: &S) -> Result<usize, TournamentError> {
    Ok(store.count_players()?)
}

pub fn tournament_state<S: TournamentStore + ?Sized>(
    store: &S,
) -> Result<TournamentState, TournamentError> {
    Ok(TournamentState::from_player_count(store.count_players()?))
}
