//! Standings: every registered player ranked by wins.

use crate::models::{Player, Standing, TournamentError};
use crate::store::TournamentStore;

/// How many players the champions list reports.
pub const CHAMPION_COUNT: usize = 3;

/// Current standings, wins descending.
///
/// Every registered player appears exactly once, including players with no
/// matches yet. Players with equal wins keep registration order (ascending
/// id), whatever order the store returned them in. The first entry is the
/// leader, or one of the players tied for first.
pub fn player_standings<S: TournamentStore + ?Sized>(
    store: &S,
) -> Result<Vec<Standing>, TournamentError> {
    let mut standings = store.standings()?;
    rank(&mut standings);
    log::debug!("Computed standings for {} player(s)", standings.len());
    Ok(standings)
}

/// The top `n` players of the current standings (fewer if the pool is smaller).
pub fn top_players<S: TournamentStore + ?Sized>(
    store: &S,
    n: usize,
) -> Result<Vec<Player>, TournamentError> {
    Ok(player_standings(store)?
        .iter()
        .take(n)
        .map(Standing::player)
        .collect())
}

fn rank(standings: &mut [Standing]) {
    standings.sort_by(|a, b| b.wins.cmp(&a.wins).then(a.id.cmp(&b.id)));
}
