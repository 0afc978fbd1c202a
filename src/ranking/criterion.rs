//! Ranking criteria: named scoring rules with a preferred direction
//!
//! The engine knows nothing about what a criterion means. Built-in rules live
//! in [`StandardCriterion`]; callers add their own either by implementing
//! [`RankingCriterion`] or by wrapping a closure in [`CustomCriterion`].

use crate::error::RankingError;
use crate::types::Record;
use crate::utils::{as_score, differential};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Which end of the score range ranks first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Lower scores rank first
    Ascending,
    /// Higher scores rank first
    Descending,
}

impl SortDirection {
    /// Compare two scores so that `Ordering::Less` means `a` ranks ahead of `b`
    pub fn compare(self, a: i64, b: i64) -> Ordering {
        match self {
            SortDirection::Ascending => a.cmp(&b),
            SortDirection::Descending => b.cmp(&a),
        }
    }
}

/// A scoring rule that maps a record to an integer score.
///
/// Implementations must be pure: the same record always yields the same
/// score.
pub trait RankingCriterion: Send + Sync {
    /// Returns the name of this criterion.
    fn name(&self) -> &str;

    /// Returns which end of the score range ranks first.
    fn direction(&self) -> SortDirection;

    /// Computes the score of a record under this criterion.
    fn score(&self, record: &Record) -> i64;
}

/// The built-in criteria
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StandardCriterion {
    FewestMatchLosses,
    GameWinLossDifferential,
    MatchWinLossDifferential,
    MostMatchWins,
    TotalPoints,
}

impl StandardCriterion {
    pub const ALL: [StandardCriterion; 5] = [
        StandardCriterion::FewestMatchLosses,
        StandardCriterion::GameWinLossDifferential,
        StandardCriterion::MatchWinLossDifferential,
        StandardCriterion::MostMatchWins,
        StandardCriterion::TotalPoints,
    ];

    /// Configuration name of the criterion
    pub fn as_str(&self) -> &'static str {
        match self {
            StandardCriterion::FewestMatchLosses => "fewest_match_losses",
            StandardCriterion::GameWinLossDifferential => "game_win_loss_differential",
            StandardCriterion::MatchWinLossDifferential => "match_win_loss_differential",
            StandardCriterion::MostMatchWins => "most_match_wins",
            StandardCriterion::TotalPoints => "total_points",
        }
    }
}

impl RankingCriterion for StandardCriterion {
    fn name(&self) -> &str {
        self.as_str()
    }

    fn direction(&self) -> SortDirection {
        match self {
            StandardCriterion::FewestMatchLosses => SortDirection::Ascending,
            _ => SortDirection::Descending,
        }
    }

    fn score(&self, record: &Record) -> i64 {
        match self {
            StandardCriterion::FewestMatchLosses => as_score(record.match_losses()),
            StandardCriterion::GameWinLossDifferential => {
                differential(record.game_wins(), record.game_losses())
            }
            StandardCriterion::MatchWinLossDifferential => {
                differential(record.match_wins(), record.match_losses())
            }
            StandardCriterion::MostMatchWins => as_score(record.match_wins()),
            StandardCriterion::TotalPoints => as_score(record.total_points()),
        }
    }
}

impl std::fmt::Display for StandardCriterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StandardCriterion {
    type Err = RankingError;

    /// Accepts snake_case or kebab-case names, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        StandardCriterion::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| RankingError::UnknownCriterion {
                name: s.to_string(),
            })
    }
}

/// Parse a comma separated list of criterion names
pub fn parse_criteria_list(list: &str) -> Result<Vec<StandardCriterion>, RankingError> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(StandardCriterion::from_str)
        .collect()
}

type ScoreFn = dyn Fn(&Record) -> i64 + Send + Sync;

/// A caller-defined criterion backed by a closure
///
/// ```
/// use standings::ranking::{CustomCriterion, RankingCriterion, SortDirection};
/// use standings::types::Record;
///
/// let most_games = CustomCriterion::new("most_game_wins", SortDirection::Descending, |r| {
///     r.game_wins() as i64
/// });
///
/// assert_eq!(most_games.name(), "most_game_wins");
/// assert_eq!(most_games.score(&Record::new("A").with_game_wins(4)), 4);
/// ```
pub struct CustomCriterion {
    name: String,
    direction: SortDirection,
    score_fn: Box<ScoreFn>,
}

impl CustomCriterion {
    pub fn new<F>(name: impl Into<String>, direction: SortDirection, score_fn: F) -> Self
    where
        F: Fn(&Record) -> i64 + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            direction,
            score_fn: Box::new(score_fn),
        }
    }
}

impl std::fmt::Debug for CustomCriterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomCriterion")
            .field("name", &self.name)
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}

impl RankingCriterion for CustomCriterion {
    fn name(&self) -> &str {
        &self.name
    }

    fn direction(&self) -> SortDirection {
        self.direction
    }

    fn score(&self, record: &Record) -> i64 {
        (self.score_fn)(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> Record {
        Record::new("A")
            .with_match_wins(3)
            .with_match_losses(5)
            .with_game_wins(10)
            .with_game_losses(4)
            .with_total_points(77)
    }

    #[test]
    fn test_standard_scores() {
        let record = sample_record();

        assert_eq!(StandardCriterion::FewestMatchLosses.score(&record), 5);
        assert_eq!(StandardCriterion::GameWinLossDifferential.score(&record), 6);
        assert_eq!(StandardCriterion::MatchWinLossDifferential.score(&record), -2);
        assert_eq!(StandardCriterion::MostMatchWins.score(&record), 3);
        assert_eq!(StandardCriterion::TotalPoints.score(&record), 77);
    }

    #[test]
    fn test_standard_directions() {
        for criterion in StandardCriterion::ALL {
            let expected = if criterion == StandardCriterion::FewestMatchLosses {
                SortDirection::Ascending
            } else {
                SortDirection::Descending
            };
            assert_eq!(criterion.direction(), expected, "{criterion}");
        }
    }

    #[test]
    fn test_direction_compare() {
        assert_eq!(SortDirection::Ascending.compare(1, 2), Ordering::Less);
        assert_eq!(SortDirection::Descending.compare(1, 2), Ordering::Greater);
        assert_eq!(SortDirection::Descending.compare(7, 7), Ordering::Equal);
    }

    #[test]
    fn test_from_str_accepts_variants() {
        assert_eq!(
            "most_match_wins".parse::<StandardCriterion>().unwrap(),
            StandardCriterion::MostMatchWins
        );
        assert_eq!(
            "Game-Win-Loss-Differential".parse::<StandardCriterion>().unwrap(),
            StandardCriterion::GameWinLossDifferential
        );
        assert!(matches!(
            "elo".parse::<StandardCriterion>(),
            Err(RankingError::UnknownCriterion { .. })
        ));
    }

    #[test]
    fn test_name_round_trips_through_from_str() {
        for criterion in StandardCriterion::ALL {
            assert_eq!(criterion.name().parse::<StandardCriterion>().unwrap(), criterion);
        }
    }

    #[test]
    fn test_parse_criteria_list() {
        let parsed = parse_criteria_list("most_match_wins, fewest-match-losses,").unwrap();
        assert_eq!(
            parsed,
            vec![
                StandardCriterion::MostMatchWins,
                StandardCriterion::FewestMatchLosses
            ]
        );

        assert!(parse_criteria_list("total_points,unknown").is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&StandardCriterion::MatchWinLossDifferential).unwrap();
        assert_eq!(json, "\"match_win_loss_differential\"");
    }

    #[test]
    fn test_custom_criterion() {
        let criterion = CustomCriterion::new("most_game_wins", SortDirection::Descending, |r| {
            as_score(r.game_wins())
        });

        assert_eq!(criterion.name(), "most_game_wins");
        assert_eq!(criterion.direction(), SortDirection::Descending);
        assert_eq!(criterion.score(&sample_record()), 10);
    }
}
