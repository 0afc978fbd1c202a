//! Ranking configuration

use crate::ranking::StandardCriterion;
use serde::{Deserialize, Serialize};

/// Criteria applied when ranking, highest priority first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingSettings {
    pub criteria: Vec<StandardCriterion>,
    /// Aggregate on the rayon pool when built with the `parallel` feature
    pub parallel: bool,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            criteria: vec![
                StandardCriterion::MatchWinLossDifferential,
                StandardCriterion::GameWinLossDifferential,
                StandardCriterion::TotalPoints,
            ],
            parallel: false,
        }
    }
}
