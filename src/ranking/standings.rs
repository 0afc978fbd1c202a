//! Standings table with shared places for tied records

use crate::ranking::engine::TieGroup;
use crate::types::Record;
use serde::{Deserialize, Serialize};

/// A ranked record and its competition place (1-based)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsEntry {
    pub place: usize,
    pub record: Record,
}

/// Final standings: every record of a tie group shares one place, and the
/// next group's place skips past the size of the group (1, 2, 2, 4, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    /// Names of the criteria applied, in priority order
    pub criteria: Vec<String>,
    pub entries: Vec<StandingsEntry>,
}

impl Standings {
    pub fn from_tie_groups(groups: Vec<TieGroup>, criteria: Vec<String>) -> Self {
        let mut entries = Vec::with_capacity(groups.iter().map(Vec::len).sum());
        for group in groups {
            let place = entries.len() + 1;
            entries.extend(
                group
                    .into_iter()
                    .map(|record| StandingsEntry { place, record }),
            );
        }
        Self { criteria, entries }
    }

    pub fn entries(&self) -> &[StandingsEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records sharing first place
    pub fn leaders(&self) -> Vec<&Record> {
        self.entries
            .iter()
            .take_while(|entry| entry.place == 1)
            .map(|entry| &entry.record)
            .collect()
    }

    /// Place of a player, if present
    pub fn place_of(&self, player_name: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|entry| entry.record.player().name() == player_name)
            .map(|entry| entry.place)
    }

    /// Groups of entries sharing a place
    pub fn tie_groups(&self) -> impl Iterator<Item = &[StandingsEntry]> {
        self.entries.chunk_by(|a, b| a.place == b.place)
    }

    pub fn into_records(self) -> Vec<Record> {
        self.entries.into_iter().map(|entry| entry.record).collect()
    }
}

impl std::fmt::Display for Standings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Criteria: {}", self.criteria.join(" > "))?;
        writeln!(
            f,
            "{:>5}  {:<24} {:>5} {:>5} {:>6} {:>6} {:>8}",
            "Place", "Player", "MW", "ML", "GW", "GL", "Points"
        )?;
        writeln!(f, "{}", "-".repeat(66))?;

        for group in self.tie_groups() {
            let tied = group.len() > 1;
            for entry in group {
                let place = if tied {
                    format!("T{}", entry.place)
                } else {
                    entry.place.to_string()
                };
                let record = &entry.record;
                writeln!(
                    f,
                    "{:>5}  {:<24} {:>5} {:>5} {:>6} {:>6} {:>8}",
                    place,
                    record.player().name(),
                    record.match_wins(),
                    record.match_losses(),
                    record.game_wins(),
                    record.game_losses(),
                    record.total_points()
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Standings {
        Standings::from_tie_groups(
            vec![
                vec![Record::new("B").with_match_wins(3)],
                vec![
                    Record::new("A").with_match_wins(2),
                    Record::new("C").with_match_wins(2),
                ],
                vec![Record::new("D")],
            ],
            vec!["most_match_wins".to_string()],
        )
    }

    #[test]
    fn test_competition_places() {
        let standings = sample();
        let places: Vec<usize> = standings.entries().iter().map(|e| e.place).collect();

        assert_eq!(places, vec![1, 2, 2, 4]);
        assert_eq!(standings.len(), 4);
        assert!(!standings.is_empty());
        assert_eq!(standings.place_of("C"), Some(2));
        assert_eq!(standings.place_of("nobody"), None);
    }

    #[test]
    fn test_shared_first_place() {
        let standings = Standings::from_tie_groups(
            vec![vec![Record::new("A"), Record::new("B")], vec![Record::new("C")]],
            vec![],
        );

        let leaders: Vec<&str> = standings
            .leaders()
            .iter()
            .map(|r| r.player().name())
            .collect();
        assert_eq!(leaders, vec!["A", "B"]);
        assert_eq!(standings.place_of("C"), Some(3));
    }

    #[test]
    fn test_tie_groups_round_trip() {
        let standings = sample();
        let sizes: Vec<usize> = standings.tie_groups().map(|g| g.len()).collect();
        assert_eq!(sizes, vec![1, 2, 1]);
    }

    #[test]
    fn test_display_marks_ties() {
        let table = sample().to_string();

        assert!(table.starts_with("Criteria: most_match_wins\n"));
        assert!(table.contains("   T2  A"));
        assert!(table.contains("    4  D"));
    }

    #[test]
    fn test_into_records_keeps_order() {
        let names: Vec<String> = sample()
            .into_records()
            .into_iter()
            .map(|r| r.player().name().to_string())
            .collect();
        assert_eq!(names, vec!["B", "A", "C", "D"]);
    }
}
