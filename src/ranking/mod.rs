//! Standings computation
//!
//! Two stages: the aggregator folds match results into per-player records,
//! and the engine orders those records by cascading tiebreak criteria.

pub mod aggregator;
pub mod calculator;
pub mod criterion;
pub mod engine;
pub mod standings;

// Re-export commonly used types
#[cfg(feature = "parallel")]
pub use aggregator::aggregate_parallel;
pub use aggregator::aggregate;
pub use calculator::RankingCalculator;
pub use criterion::{
    parse_criteria_list, CustomCriterion, RankingCriterion, SortDirection, StandardCriterion,
};
pub use engine::{rank, rank_tie_groups, RankingEngine, TieGroup};
pub use standings::{Standings, StandingsEntry};
