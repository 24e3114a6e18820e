//! Match recording.

use crate::models::{PlayerId, TournamentError};
use crate::store::TournamentStore;

/// Record the outcome of a single match.
///
/// The winner gains a win; both players gain a match played. The store
/// applies all three updates in one transaction. Nothing changes if the ids
/// are equal or either is not registered.
pub fn report_match<S: TournamentStore + ?Sized>(
    store: &mut S,
    winner: PlayerId,
    loser: PlayerId,
) -> Result<(), TournamentError> {
    if winner == loser {
        log::warn!("Rejected match report: player {} against themself", winner);
        return Err(TournamentError::SameCombatant(winner));
    }
    for id in [winner, loser] {
        if !store.contains_player(id)? {
            log::warn!("Rejected match report: player {} is not registered", id);
            return Err(TournamentError::UnknownPlayer(id));
        }
    }

    if !store.record_match(winner, loser)? {
        // A player vanished between the check and the update.
        let missing = if store.contains_player(winner)? { loser } else { winner };
        return Err(TournamentError::UnknownPlayer(missing));
    }
    log::info!("Recorded match: {} beat {}", winner, loser);
    Ok(())
}
