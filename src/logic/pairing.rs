//! Swiss pairings for the next round.

use crate::logic::standings::player_standings;
use crate::models::{Pairing, TournamentError};
use crate::store::TournamentStore;

/// Pair players for the next round.
///
/// 1. Rank players as in [`player_standings`].
/// 2. Pair ranks (1, 2), (3, 4), ... so each player meets someone with an
///    equal or nearly equal record.
///
/// Every player appears in exactly one pairing. An odd pool is rejected
/// before any pairing is produced; there is no bye.
pub fn swiss_pairings<S: TournamentStore + ?Sized>(
    store: &S,
) -> Result<Vec<Pairing>, TournamentError> {
    let standings = player_standings(store)?;
    if standings.len() % 2 != 0 {
        log::warn!("Refusing to pair {} players", standings.len());
        return Err(TournamentError::OddPlayerCount(standings.len()));
    }

    let pairings: Vec<Pairing> = standings
        .chunks_exact(2)
        .map(|pair| Pairing::new(&pair[0], &pair[1]))
        .collect();
    log::debug!("Generated {} pairing(s)", pairings.len());
    Ok(pairings)
}

/// Rounds needed to separate a single winner from `players`: floor(log2 n).
pub fn recommended_rounds(players: usize) -> u32 {
    if players < 2 {
        0
    } else {
        players.ilog2()
    }
}
