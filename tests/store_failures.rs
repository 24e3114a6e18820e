//! Tests for store failures surfacing through the tournament operations.

use swiss_tournament::{
    clear_matches, clear_players, count_players, player_standings, register_player, report_match,
    swiss_pairings, top_players, PlayerId, Standing, StoreError, StoreResult, TournamentError,
    TournamentStore,
};

/// A store whose backend is gone: every call fails.
struct Unreachable;

fn down<T>() -> StoreResult<T> {
    Err(StoreError::Corrupt("down".to_string()))
}

impl TournamentStore for Unreachable {
    fn insert_player(&mut self, _name: &str) -> StoreResult<PlayerId> {
        down()
    }
    fn zero_scores(&mut self) -> StoreResult<()> {
        down()
    }
    fn delete_players(&mut self) -> StoreResult<()> {
        down()
    }
    fn count_players(&self) -> StoreResult<usize> {
        down()
    }
    fn contains_player(&self, _id: PlayerId) -> StoreResult<bool> {
        down()
    }
    fn record_match(&mut self, _winner: PlayerId, _loser: PlayerId) -> StoreResult<bool> {
        down()
    }
    fn standings(&self) -> StoreResult<Vec<Standing>> {
        down()
    }
}

fn is_unavailable<T>(result: Result<T, TournamentError>) -> bool {
    matches!(result, Err(TournamentError::StorageUnavailable(msg)) if msg == "corrupt data: down")
}

#[test]
fn every_operation_reports_storage_unavailable() {
    let mut store = Unreachable;
    assert!(is_unavailable(player_standings(&store)));
    assert!(is_unavailable(swiss_pairings(&store)));
    assert!(is_unavailable(top_players(&store, 3)));
    assert!(is_unavailable(count_players(&store)));
    assert!(is_unavailable(register_player(&mut store, "a")));
    assert!(is_unavailable(report_match(&mut store, 1, 2)));
    assert!(is_unavailable(clear_matches(&mut store)));
    assert!(is_unavailable(clear_players(&mut store)));
}

#[test]
fn same_combatant_is_rejected_before_touching_the_store() {
    let mut store = Unreachable;
    assert!(matches!(
        report_match(&mut store, 4, 4),
        Err(TournamentError::SameCombatant(4))
    ));
}

/// Reports both players as registered, but one of them (`gone`) is deleted
/// before the match update runs, so the update applies nothing.
struct Vanishing {
    present: Vec<PlayerId>,
    gone: PlayerId,
}

impl TournamentStore for Vanishing {
    fn insert_player(&mut self, _name: &str) -> StoreResult<PlayerId> {
        down()
    }
    fn zero_scores(&mut self) -> StoreResult<()> {
        Ok(())
    }
    fn delete_players(&mut self) -> StoreResult<()> {
        Ok(())
    }
    fn count_players(&self) -> StoreResult<usize> {
        Ok(self.present.len())
    }
    fn contains_player(&self, id: PlayerId) -> StoreResult<bool> {
        Ok(self.present.contains(&id))
    }
    fn record_match(&mut self, _winner: PlayerId, _loser: PlayerId) -> StoreResult<bool> {
        let gone = self.gone;
        self.present.retain(|&id| id != gone);
        Ok(false)
    }
    fn standings(&self) -> StoreResult<Vec<Standing>> {
        Ok(Vec::new())
    }
}

#[test]
fn player_removed_mid_report_is_unknown() {
    let mut store = Vanishing {
        present: vec![1, 2],
        gone: 2,
    };
    assert!(matches!(
        report_match(&mut store, 1, 2),
        Err(TournamentError::UnknownPlayer(2))
    ));

    let mut store = Vanishing {
        present: vec![1, 2],
        gone: 1,
    };
    assert!(matches!(
        report_match(&mut store, 1, 2),
        Err(TournamentError::UnknownPlayer(1))
    ));
}
