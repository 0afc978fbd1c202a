//! Standings - ranked standings from raw match results
//!
//! This crate aggregates completed matches into per-player records and
//! orders those records with a configurable, prioritized list of tiebreak
//! criteria.

pub mod config;
pub mod error;
pub mod input;
pub mod ranking;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{RankingError, Result};
pub use types::*;

// Re-export key components
pub use ranking::{
    aggregate, rank, CustomCriterion, RankingCalculator, RankingCriterion, RankingEngine,
    SortDirection, StandardCriterion, Standings,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
