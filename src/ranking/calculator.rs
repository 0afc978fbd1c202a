//! Ranking calculator composing aggregation and ranking
//!
//! The calculator is configured once with a list of standard criteria and
//! then turns match batches into standings.

use crate::config::RankingSettings;
use crate::error::{RankingError, Result};
use crate::ranking::aggregator::aggregate;
use crate::ranking::criterion::StandardCriterion;
use crate::ranking::engine::RankingEngine;
use crate::ranking::standings::Standings;
use crate::types::{Match, Record};
use tracing::{debug, info};

/// Calculator for records and rankings over a fixed criteria list
#[derive(Debug)]
pub struct RankingCalculator {
    criteria: Vec<StandardCriterion>,
    engine: RankingEngine,
    parallel: bool,
}

impl RankingCalculator {
    /// Create a calculator applying `criteria` in order
    pub fn new(criteria: Vec<StandardCriterion>) -> Result<Self> {
        if criteria.is_empty() {
            return Err(
                RankingError::invalid_argument("At least one ranking criterion must be provided")
                    .into(),
            );
        }

        let engine = RankingEngine::new().with_criteria(criteria.iter().copied());
        Ok(Self {
            criteria,
            engine,
            parallel: false,
        })
    }

    /// Create a calculator from ranking settings
    pub fn from_config(settings: &RankingSettings) -> Result<Self> {
        Ok(Self::new(settings.criteria.clone())?.with_parallel(settings.parallel))
    }

    /// Aggregate on the rayon pool; has no effect without the `parallel` feature
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn criteria(&self) -> &[StandardCriterion] {
        &self.criteria
    }

    /// Records of every player found in `matches`
    pub fn calculate_records(&self, matches: &[Match]) -> Result<Vec<Record>> {
        #[cfg(feature = "parallel")]
        if self.parallel {
            return crate::ranking::aggregator::aggregate_parallel(matches);
        }

        if self.parallel {
            debug!("Parallel aggregation requested but the parallel feature is disabled");
        }
        aggregate(matches)
    }

    /// Order records by the configured criteria
    pub fn calculate_rankings(&self, records: Vec<Record>) -> Result<Vec<Record>> {
        self.engine.rank(records)
    }

    /// Aggregate `matches` and rank the resulting records
    pub fn calculate_standings(&self, matches: &[Match]) -> Result<Standings> {
        let records = self.calculate_records(matches)?;
        let standings = self.engine.standings(records)?;

        info!(
            "Ranked {} players from {} matches using {} criteria",
            standings.len(),
            matches.len(),
            self.criteria.len()
        );
        Ok(standings)
    }
}
