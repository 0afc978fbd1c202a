//! Cascading tiebreak ranking engine
//!
//! Records start out as one tie group. Each criterion, in priority order,
//! splits every current tie group into sub-groups of equal score, ordered by
//! the criterion's direction. Records that share a score keep their previous
//! relative order, so whatever is still grouped after the last criterion is
//! genuinely tied under every criterion supplied.

use crate::error::{RankingError, Result};
use crate::ranking::criterion::{RankingCriterion, SortDirection};
use crate::ranking::standings::Standings;
use crate::types::Record;
use std::collections::BTreeMap;
use tracing::debug;

/// Records that are indistinguishable under all criteria applied so far
pub type TieGroup = Vec<Record>;

fn validate_inputs(records: &[Record], criteria: &[&dyn RankingCriterion]) -> Result<()> {
    if records.is_empty() {
        return Err(RankingError::invalid_argument("At least one record must be provided").into());
    }
    if criteria.is_empty() {
        return Err(
            RankingError::invalid_argument("At least one ranking criterion must be provided")
                .into(),
        );
    }
    Ok(())
}

/// Split one tie group into ordered sub-groups of equal score
fn split_group(group: TieGroup, criterion: &dyn RankingCriterion) -> Vec<TieGroup> {
    let mut buckets: BTreeMap<i64, TieGroup> = BTreeMap::new();
    for record in group {
        buckets
            .entry(criterion.score(&record))
            .or_default()
            .push(record);
    }

    match criterion.direction() {
        SortDirection::Ascending => buckets.into_values().collect(),
        SortDirection::Descending => buckets.into_values().rev().collect(),
    }
}

/// Rank records and return the final tie groups, best group first.
///
/// # Errors
/// [`RankingError::InvalidArgument`] when `records` or `criteria` is empty.
pub fn rank_tie_groups(
    records: Vec<Record>,
    criteria: &[&dyn RankingCriterion],
) -> Result<Vec<TieGroup>> {
    validate_inputs(&records, criteria)?;

    let mut groups: Vec<TieGroup> = vec![records];
    for criterion in criteria {
        groups = groups
            .into_iter()
            .flat_map(|group| split_group(group, *criterion))
            .collect();

        debug!(
            "Applied criterion {} ({:?}): {} tie groups",
            criterion.name(),
            criterion.direction(),
            groups.len()
        );
    }

    Ok(groups)
}

/// Rank records by applying criteria in priority order.
///
/// The result is a permutation of `records`. Records tied under every
/// criterion keep their input order.
///
/// # Errors
/// [`RankingError::InvalidArgument`] when `records` or `criteria` is empty.
pub fn rank(records: Vec<Record>, criteria: &[&dyn RankingCriterion]) -> Result<Vec<Record>> {
    Ok(rank_tie_groups(records, criteria)?
        .into_iter()
        .flatten()
        .collect())
}

/// Engine owning an ordered list of ranking criteria.
///
/// ```
/// use standings::ranking::{RankingEngine, StandardCriterion};
/// use standings::types::Record;
///
/// let engine = RankingEngine::new()
///     .with_criterion(StandardCriterion::MostMatchWins)
///     .with_criterion(StandardCriterion::FewestMatchLosses);
///
/// let records = vec![
///     Record::new("A").with_match_wins(2).with_match_losses(1),
///     Record::new("B").with_match_wins(2),
/// ];
/// let ranked = engine.rank(records)?;
/// assert_eq!(ranked[0].player().name(), "B");
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Default)]
pub struct RankingEngine {
    criteria: Vec<Box<dyn RankingCriterion>>,
}

impl RankingEngine {
    /// Creates an engine with no criteria.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a criterion with the lowest priority so far.
    pub fn with_criterion<C: RankingCriterion + 'static>(mut self, criterion: C) -> Self {
        self.criteria.push(Box::new(criterion));
        self
    }

    /// Appends several criteria in order.
    pub fn with_criteria<C, I>(mut self, criteria: I) -> Self
    where
        C: RankingCriterion + 'static,
        I: IntoIterator<Item = C>,
    {
        for criterion in criteria {
            self.criteria.push(Box::new(criterion));
        }
        self
    }

    /// Returns the number of criteria in this engine.
    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }

    /// Returns the names of all criteria in priority order.
    pub fn criterion_names(&self) -> Vec<&str> {
        self.criteria.iter().map(|c| c.name()).collect()
    }

    fn criteria_refs(&self) -> Vec<&dyn RankingCriterion> {
        self.criteria
            .iter()
            .map(|c| &**c as &dyn RankingCriterion)
            .collect()
    }

    pub fn rank_tie_groups(&self, records: Vec<Record>) -> Result<Vec<TieGroup>> {
        rank_tie_groups(records, &self.criteria_refs())
    }

    pub fn rank(&self, records: Vec<Record>) -> Result<Vec<Record>> {
        rank(records, &self.criteria_refs())
    }

    /// Rank records and assign competition places
    pub fn standings(&self, records: Vec<Record>) -> Result<Standings> {
        let groups = self.rank_tie_groups(records)?;
        let names = self
            .criterion_names()
            .into_iter()
            .map(str::to_string)
            .collect();
        Ok(Standings::from_tie_groups(groups, names))
    }
}

impl std::fmt::Debug for RankingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RankingEngine")
            .field("criteria", &self.criterion_names())
            .finish()
    }
}
