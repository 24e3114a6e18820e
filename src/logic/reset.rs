//! Reset operations. Both are idempotent and succeed on an empty pool.

use crate::models::TournamentError;
use crate::store::TournamentStore;

/// Zero every player's wins and matches played. Registered players are kept,
/// so a new round sequence can start among the same pool.
pub fn clear_matches<S: TournamentStore + ?Sized>(store: &mut S) -> Result<(), TournamentError> {
    store.zero_scores()?;
    log::info!("Cleared all match records");
    Ok(())
}

/// Remove every player and their records. The next registered player gets id 1 again.
pub fn clear_players<S: TournamentStore + ?Sized>(store: &mut S) -> Result<(), TournamentError> {
    store.delete_players()?;
    log::info!("Cleared all players");
    Ok(())
}
