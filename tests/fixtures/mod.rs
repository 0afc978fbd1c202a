//! Shared fixtures for integration and property tests

#![allow(dead_code)]

use standings::types::{Game, Match, Player, Record};
use std::collections::HashMap;

pub const PLAYER_A: &str = "Player A";
pub const PLAYER_B: &str = "Player B";
pub const PLAYER_C: &str = "Player C";

/// A match whose games are given as (score1, score2) pairs
pub fn match_between(player1: &str, player2: &str, games: &[(u64, u64)]) -> Match {
    Match::new(
        player1,
        player2,
        games.iter().map(|&(s1, s2)| Game::new(s1, s2)).collect(),
    )
}

/// Index records by player name, failing on duplicates
pub fn by_player(records: &[Record]) -> HashMap<Player, Record> {
    let mut map = HashMap::new();
    for record in records {
        let previous = map.insert(record.player().clone(), record.clone());
        assert!(
            previous.is_none(),
            "duplicate record for {}",
            record.player()
        );
    }
    map
}

/// Assert two record lists hold the same records in any order
pub fn assert_same_records(expected: &[Record], actual: &[Record]) {
    assert_eq!(expected.len(), actual.len(), "record count differs");
    assert_eq!(by_player(expected), by_player(actual));
}

pub fn player_names(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.player().name().to_string())
        .collect()
}
