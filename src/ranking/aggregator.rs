//! Match aggregation
//!
//! Folds a batch of match results into one cumulative [`Record`] per
//! distinct player.

use crate::error::{RankingError, Result};
use crate::types::{Match, MatchOutcome, Player, Record};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Records keyed by player, kept in first-encounter order
#[derive(Debug, Default)]
struct RecordBook {
    index: HashMap<Player, usize>,
    records: Vec<Record>,
}

impl RecordBook {
    /// Get the record for a player, creating an empty one on first encounter
    fn entry(&mut self, player: &Player) -> usize {
        if let Some(&slot) = self.index.get(player) {
            return slot;
        }
        let slot = self.records.len();
        self.records.push(Record::new(player.clone()));
        self.index.insert(player.clone(), slot);
        slot
    }

    fn apply(&mut self, m: &Match) {
        let slot1 = self.entry(&m.player1);
        let slot2 = self.entry(&m.player2);

        let player1_games = m.player1_game_score();
        let player2_games = m.player2_game_score();

        self.records[slot1].add_points(m.player1_total_score());
        self.records[slot2].add_points(m.player2_total_score());

        self.records[slot1].add_games(player1_games, player2_games);
        self.records[slot2].add_games(player2_games, player1_games);

        match m.outcome() {
            MatchOutcome::Player1Won => {
                self.records[slot1].add_match_win();
                self.records[slot2].add_match_loss();
            }
            MatchOutcome::Player2Won => {
                self.records[slot2].add_match_win();
                self.records[slot1].add_match_loss();
            }
            MatchOutcome::Tied => {}
        }
    }

    #[cfg(feature = "parallel")]
    fn absorb(&mut self, partial: Record) {
        let slot = self.entry(partial.player());
        self.records[slot].merge(&partial);
    }

    fn into_records(self) -> Vec<Record> {
        self.records
    }
}

fn ensure_not_empty(matches: &[Match]) -> Result<()> {
    if matches.is_empty() {
        return Err(RankingError::invalid_argument("At least one match must be provided").into());
    }
    Ok(())
}

fn accumulate(matches: &[Match]) -> RecordBook {
    let mut book = RecordBook::default();
    for (index, m) in matches.iter().enumerate() {
        if m.games.is_empty() {
            warn!(
                "Match {} between {} and {} has no games; counting it as a tie",
                index, m.player1, m.player2
            );
        }
        book.apply(m);
    }
    book
}

/// Aggregate matches into one record per distinct player.
///
/// Records come back in the order their players were first seen, but callers
/// should treat the result as a set.
///
/// # Errors
/// [`RankingError::InvalidArgument`] when `matches` is empty.
pub fn aggregate(matches: &[Match]) -> Result<Vec<Record>> {
    ensure_not_empty(matches)?;

    let records = accumulate(matches).into_records();

    debug!(
        "Aggregated {} matches into {} player records",
        matches.len(),
        records.len()
    );
    Ok(records)
}

/// Aggregate matches on the rayon thread pool.
///
/// Matches are split into chunks, each chunk is aggregated on its own and
/// the partial records are summed per player. The result equals
/// [`aggregate`] as a set.
#[cfg(feature = "parallel")]
pub fn aggregate_parallel(matches: &[Match]) -> Result<Vec<Record>> {
    use rayon::prelude::*;

    ensure_not_empty(matches)?;

    let chunk_size = (matches.len() / rayon::current_num_threads()).max(1);
    let partials: Vec<RecordBook> = matches.par_chunks(chunk_size).map(accumulate).collect();

    let mut book = RecordBook::default();
    for partial in partials {
        for record in partial.into_records() {
            book.absorb(record);
        }
    }
    let records = book.into_records();

    debug!(
        "Aggregated {} matches into {} player records using {} chunks",
        matches.len(),
        records.len(),
        matches.len().div_ceil(chunk_size)
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::is_invalid_argument;
    use crate::types::Game;

    fn find<'a>(records: &'a [Record], name: &str) -> &'a Record {
        records
            .iter()
            .find(|r| r.player().name() == name)
            .unwrap_or_else(|| panic!("no record for {name}"))
    }

    #[test]
    fn test_empty_matches_error() {
        let err = aggregate(&[]).unwrap_err();
        assert!(is_invalid_argument(&err));
    }

    #[test]
    fn test_one_record_per_player() {
        let matches = vec![
            Match::new("A", "B", vec![Game::new(4, 2)]),
            Match::new("B", "C", vec![Game::new(1, 3)]),
            Match::new("C", "A", vec![Game::new(2, 2)]),
        ];

        let records = aggregate(&matches).unwrap();
        assert_eq!(records.len(), 3);

        let names: Vec<&str> = records.iter().map(|r| r.player().name()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_tied_match_adds_no_match_result() {
        let matches = vec![Match::new("A", "B", vec![Game::new(5, 1), Game::new(0, 2)])];

        let records = aggregate(&matches).unwrap();
        let a = find(&records, "A");
        let b = find(&records, "B");

        assert_eq!(a.matches_decided(), 0);
        assert_eq!(b.matches_decided(), 0);
        assert_eq!((a.game_wins(), a.game_losses()), (1, 1));
        assert_eq!((b.game_wins(), b.game_losses()), (1, 1));
        assert_eq!(a.total_points(), 5);
        assert_eq!(b.total_points(), 3);
    }

    #[test]
    fn test_tied_game_only_adds_points() {
        let matches = vec![Match::new("A", "B", vec![Game::new(3, 3)])];

        let records = aggregate(&matches).unwrap();
        let a = find(&records, "A");

        assert_eq!(a.game_wins() + a.game_losses(), 0);
        assert_eq!(a.total_points(), 3);
    }

    #[test]
    fn test_zero_game_match_creates_empty_records() {
        let matches = vec![Match::new("A", "B", vec![])];

        let records = aggregate(&matches).unwrap();
        assert_eq!(records, vec![Record::new("A"), Record::new("B")]);
    }

    #[test]
    fn test_player2_win_credits_player2() {
        let matches = vec![Match::new("A", "C", vec![Game::new(1, 5)])];

        let records = aggregate(&matches).unwrap();
        assert_eq!(
            find(&records, "C"),
            &Record::new("C")
                .with_match_wins(1)
                .with_game_wins(1)
                .with_total_points(5)
        );
        assert_eq!(
            find(&records, "A"),
            &Record::new("A")
                .with_match_losses(1)
                .with_game_losses(1)
                .with_total_points(1)
        );
    }

    #[test]
    fn test_extreme_scores_saturate_points() {
        let json = r#"[{"player1":"A","player2":"B","games":[
            {"score1":18446744073709551615,"score2":0},
            {"score1":1,"score2":0}
        ]}]"#;
        let matches = crate::input::parse_matches(json).unwrap();

        let records = aggregate(&matches).unwrap();
        let a = find(&records, "A");
        assert_eq!(a.total_points(), u64::MAX);
        assert_eq!(a.game_wins(), 2);
        assert_eq!(a.match_wins(), 1);
        assert_eq!(find(&records, "B").total_points(), 0);
    }

    #[test]
    fn test_match_order_does_not_matter() {
        let mut matches = vec![
            Match::new("A", "B", vec![Game::new(4, 2), Game::new(3, 0)]),
            Match::new("A", "C", vec![Game::new(1, 5), Game::new(8, 0), Game::new(3, 2)]),
            Match::new("B", "C", vec![Game::new(2, 2)]),
        ];

        let mut forward = aggregate(&matches).unwrap();
        matches.reverse();
        let mut backward = aggregate(&matches).unwrap();

        forward.sort_by(|a, b| a.player().cmp(b.player()));
        backward.sort_by(|a, b| a.player().cmp(b.player()));
        assert_eq!(forward, backward);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let players = ["A", "B", "C", "D", "E"];
        let matches: Vec<Match> = (0..200u64)
            .map(|i| {
                let p1 = players[(i % 5) as usize];
                let p2 = players[((i + 1 + i % 3) % 5) as usize];
                Match::new(p1, p2, vec![Game::new(i % 7, i % 5), Game::new(i % 3, 2)])
            })
            .collect();

        let mut sequential = aggregate(&matches).unwrap();
        let mut parallel = aggregate_parallel(&matches).unwrap();

        sequential.sort_by(|a, b| a.player().cmp(b.player()));
        parallel.sort_by(|a, b| a.player().cmp(b.player()));
        assert_eq!(sequential, parallel);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_empty_matches_error() {
        let err = aggregate_parallel(&[]).unwrap_err();
        assert!(is_invalid_argument(&err));
    }
}
