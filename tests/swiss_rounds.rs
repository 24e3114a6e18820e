//! Integration tests for standings and pairings over successive rounds.

use std::collections::HashSet;
use swiss_tournament::{
    player_standings, recommended_rounds, register_player, report_match, swiss_pairings,
    top_players, MemoryStore, PlayerId, SqliteStore, TournamentError, TournamentStore,
};

fn register_all<S: TournamentStore>(store: &mut S, names: &[&str]) -> Vec<PlayerId> {
    names
        .iter()
        .map(|n| register_player(store, n).unwrap().id)
        .collect()
}

fn record(store: &impl TournamentStore) -> Vec<(String, u32, u32)> {
    player_standings(store)
        .unwrap()
        .into_iter()
        .map(|s| (s.name, s.wins, s.matches))
        .collect()
}

fn pair_names(store: &impl TournamentStore) -> Vec<(String, String)> {
    swiss_pairings(store)
        .unwrap()
        .into_iter()
        .map(|p| (p.name1, p.name2))
        .collect()
}

fn owned(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs.iter().map(|(a, b)| (a.to_string(), b.to_string())).collect()
}

fn four_player_scenario<S: TournamentStore>(mut store: S) {
    let ids = register_all(&mut store, &["A", "B", "C", "D"]);

    assert_eq!(
        record(&store),
        vec![
            ("A".to_string(), 0, 0),
            ("B".to_string(), 0, 0),
            ("C".to_string(), 0, 0),
            ("D".to_string(), 0, 0),
        ]
    );
    assert_eq!(pair_names(&store), owned(&[("A", "B"), ("C", "D")]));

    report_match(&mut store, ids[0], ids[1]).unwrap();
    report_match(&mut store, ids[2], ids[3]).unwrap();

    assert_eq!(
        record(&store),
        vec![
            ("A".to_string(), 1, 1),
            ("C".to_string(), 1, 1),
            ("B".to_string(), 0, 1),
            ("D".to_string(), 0, 1),
        ]
    );
    assert_eq!(pair_names(&store), owned(&[("A", "C"), ("B", "D")]));
}

#[test]
fn four_player_scenario_in_memory() {
    four_player_scenario(MemoryStore::new());
}

#[test]
fn four_player_scenario_sqlite() {
    four_player_scenario(SqliteStore::open_in_memory().unwrap());
}

#[test]
fn fresh_players_appear_with_empty_records() {
    let mut store = MemoryStore::new();
    let ids = register_all(&mut store, &["Ann", "Bob", "Ann"]);
    let standings = player_standings(&store).unwrap();
    assert_eq!(standings.len(), 3);
    for (s, id) in standings.iter().zip(&ids) {
        assert_eq!(s.id, *id);
        assert_eq!((s.wins, s.matches), (0, 0));
    }
}

#[test]
fn ties_keep_registration_order() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    let ids = register_all(&mut store, &["p1", "p2", "p3", "p4", "p5", "p6"]);
    // p6 and p4 win, everyone else tied on zero.
    report_match(&mut store, ids[5], ids[0]).unwrap();
    report_match(&mut store, ids[3], ids[1]).unwrap();

    let order: Vec<PlayerId> = player_standings(&store).unwrap().iter().map(|s| s.id).collect();
    assert_eq!(order, vec![ids[3], ids[5], ids[0], ids[1], ids[2], ids[4]]);
}

#[test]
fn pairings_cover_every_player_once() {
    let mut store = MemoryStore::new();
    let names: Vec<String> = (0..10).map(|i| format!("P{i}")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let ids = register_all(&mut store, &refs);
    report_match(&mut store, ids[7], ids[2]).unwrap();
    report_match(&mut store, ids[9], ids[0]).unwrap();

    let pairings = swiss_pairings(&store).unwrap();
    assert_eq!(pairings.len(), 5);
    let mut seen = HashSet::new();
    for p in &pairings {
        assert_ne!(p.id1, p.id2);
        assert!(seen.insert(p.id1));
        assert!(seen.insert(p.id2));
    }
    assert_eq!(seen, ids.into_iter().collect::<HashSet<_>>());
}

#[test]
fn pairings_match_winners_against_winners() {
    let mut store = MemoryStore::new();
    let ids = register_all(&mut store, &["a", "b", "c", "d", "e", "f", "g", "h"]);
    for pair in swiss_pairings(&store).unwrap() {
        report_match(&mut store, pair.id1, pair.id2).unwrap();
    }
    let pairings = swiss_pairings(&store).unwrap();
    // Round one winners are a, c, e, g.
    assert_eq!((pairings[0].id1, pairings[0].id2), (ids[0], ids[2]));
    assert_eq!((pairings[1].id1, pairings[1].id2), (ids[4], ids[6]));
    assert_eq!((pairings[2].id1, pairings[2].id2), (ids[1], ids[3]));
    assert_eq!((pairings[3].id1, pairings[3].id2), (ids[5], ids[7]));
}

#[test]
fn pairing_an_odd_pool_fails() {
    let mut store = MemoryStore::new();
    register_all(&mut store, &["a", "b", "c", "d", "e"]);
    assert!(matches!(
        swiss_pairings(&store),
        Err(TournamentError::OddPlayerCount(5))
    ));
}

#[test]
fn pairing_an_empty_pool_yields_nothing() {
    let store = MemoryStore::new();
    assert!(swiss_pairings(&store).unwrap().is_empty());
}

#[test]
fn wins_never_exceed_matches_over_a_full_tournament() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    for i in 0..16 {
        register_player(&mut store, &format!("player{}", i + 1)).unwrap();
    }
    let rounds = recommended_rounds(16);
    assert_eq!(rounds, 4);
    for round in 0..rounds {
        for (i, pair) in swiss_pairings(&store).unwrap().into_iter().enumerate() {
            // Alternate which side wins so the standings shuffle.
            let (w, l) = if (i + round as usize) % 2 == 0 {
                (pair.id1, pair.id2)
            } else {
                (pair.id2, pair.id1)
            };
            report_match(&mut store, w, l).unwrap();
        }
        for s in player_standings(&store).unwrap() {
            assert!(s.matches >= s.wins);
            assert_eq!(s.matches, round + 1);
        }
    }
    let standings = player_standings(&store).unwrap();
    assert!(standings.windows(2).all(|w| w[0].wins >= w[1].wins));
    assert_eq!(standings.iter().map(|s| s.wins).sum::<u32>(), 4 * 8);
}

#[test]
fn top_players_are_the_head_of_the_standings() {
    let mut store = MemoryStore::new();
    let ids = register_all(&mut store, &["a", "b", "c", "d"]);
    report_match(&mut store, ids[3], ids[0]).unwrap();
    report_match(&mut store, ids[2], ids[1]).unwrap();
    report_match(&mut store, ids[3], ids[2]).unwrap();

    let top: Vec<PlayerId> = top_players(&store, 3).unwrap().iter().map(|p| p.id).collect();
    assert_eq!(top, vec![ids[3], ids[2], ids[0]]);
    assert_eq!(top_players(&store, 10).unwrap().len(), 4);
}

#[test]
fn recommended_rounds_is_floor_log2() {
    assert_eq!(recommended_rounds(0), 0);
    assert_eq!(recommended_rounds(1), 0);
    assert_eq!(recommended_rounds(2), 1);
    assert_eq!(recommended_rounds(10), 3);
    assert_eq!(recommended_rounds(16), 4);
}
