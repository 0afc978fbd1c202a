//! Loading match batches from JSON
//!
//! Accepts either a bare array of matches or an object with a `matches`
//! array. The only structural check is that a match pits two different
//! players against each other; scores are taken at face value.

use crate::error::{RankingError, Result};
use crate::types::Match;
use anyhow::anyhow;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize)]
#[serde(untagged)]
enum MatchFile {
    List(Vec<Match>),
    Wrapped { matches: Vec<Match> },
}

/// Parse and validate matches from JSON text
pub fn parse_matches(json: &str) -> Result<Vec<Match>> {
    let file: MatchFile =
        serde_json::from_str(json).map_err(|e| anyhow!("Failed to parse matches: {}", e))?;
    let matches = match file {
        MatchFile::List(matches) | MatchFile::Wrapped { matches } => matches,
    };

    for (index, m) in matches.iter().enumerate() {
        validate_match(index, m)?;
    }
    Ok(matches)
}

/// Read and validate matches from a JSON file
pub fn load_matches(path: &Path) -> Result<Vec<Match>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read matches {}: {}", path.display(), e))?;
    let matches = parse_matches(&contents)?;

    debug!("Loaded {} matches from {}", matches.len(), path.display());
    Ok(matches)
}

fn validate_match(index: usize, m: &Match) -> Result<()> {
    if m.player1 == m.player2 {
        return Err(RankingError::InvalidMatch {
            index,
            reason: format!("{} cannot play against themselves", m.player1),
        }
        .into());
    }
    Ok(())
}
