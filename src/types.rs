//! Common types used throughout the standings crate

use serde::{Deserialize, Serialize};

/// Identity of a competitor
///
/// Equality and hashing are structural, so two `Player` values with the
/// same name are the same competitor when used as aggregation keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Player {
    name: String,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<&str> for Player {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Player {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// One scored unit of play within a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Game {
    /// Score of the match's first player
    pub score1: u64,
    /// Score of the match's second player
    pub score2: u64,
}

impl Game {
    pub fn new(score1: u64, score2: u64) -> Self {
        Self { score1, score2 }
    }
}

/// Result of a match from the first player's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    Player1Won,
    Player2Won,
    Tied,
}

/// A contest between two players composed of one or more games
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub player1: Player,
    pub player2: Player,
    pub games: Vec<Game>,
}

impl Match {
    pub fn new(player1: impl Into<Player>, player2: impl Into<Player>, games: Vec<Game>) -> Self {
        Self {
            player1: player1.into(),
            player2: player2.into(),
            games,
        }
    }

    /// Number of games the first player won outright
    pub fn player1_game_score(&self) -> u64 {
        self.games.iter().filter(|g| g.score1 > g.score2).count() as u64
    }

    /// Number of games the second player won outright
    pub fn player2_game_score(&self) -> u64 {
        self.games.iter().filter(|g| g.score2 > g.score1).count() as u64
    }

    /// Points the first player scored across all games, saturating at `u64::MAX`
    pub fn player1_total_score(&self) -> u64 {
        self.games.iter().map(|g| g.score1).fold(0, u64::saturating_add)
    }

    pub fn player2_total_score(&self) -> u64 {
        self.games.iter().map(|g| g.score2).fold(0, u64::saturating_add)
    }

    /// Decide the match by comparing game scores
    pub fn outcome(&self) -> MatchOutcome {
        let player1_wins = self.player1_game_score();
        let player2_wins = self.player2_game_score();
        match player1_wins.cmp(&player2_wins) {
            std::cmp::Ordering::Greater => MatchOutcome::Player1Won,
            std::cmp::Ordering::Less => MatchOutcome::Player2Won,
            std::cmp::Ordering::Equal => MatchOutcome::Tied,
        }
    }

    /// The player with strictly more game wins, `None` when tied
    pub fn winner(&self) -> Option<&Player> {
        match self.outcome() {
            MatchOutcome::Player1Won => Some(&self.player1),
            MatchOutcome::Player2Won => Some(&self.player2),
            MatchOutcome::Tied => None,
        }
    }

    pub fn loser(&self) -> Option<&Player> {
        match self.outcome() {
            MatchOutcome::Player1Won => Some(&self.player2),
            MatchOutcome::Player2Won => Some(&self.player1),
            MatchOutcome::Tied => None,
        }
    }
}

/// Cumulative statistics for one player across a batch of matches
///
/// Records are only accumulated into while matches are aggregated; callers
/// read them through accessors and build fixtures with the `with_*` methods.
/// Every counter saturates at `u64::MAX` instead of overflowing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    player: Player,
    match_wins: u64,
    match_losses: u64,
    game_wins: u64,
    game_losses: u64,
    total_points: u64,
}

impl Record {
    /// Create an empty record for a player
    pub fn new(player: impl Into<Player>) -> Self {
        Self {
            player: player.into(),
            match_wins: 0,
            match_losses: 0,
            game_wins: 0,
            game_losses: 0,
            total_points: 0,
        }
    }

    pub fn with_match_wins(mut self, match_wins: u64) -> Self {
        self.match_wins = match_wins;
        self
    }

    pub fn with_match_losses(mut self, match_losses: u64) -> Self {
        self.match_losses = match_losses;
        self
    }

    pub fn with_game_wins(mut self, game_wins: u64) -> Self {
        self.game_wins = game_wins;
        self
    }

    pub fn with_game_losses(mut self, game_losses: u64) -> Self {
        self.game_losses = game_losses;
        self
    }

    pub fn with_total_points(mut self, total_points: u64) -> Self {
        self.total_points = total_points;
        self
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn match_wins(&self) -> u64 {
        self.match_wins
    }

    pub fn match_losses(&self) -> u64 {
        self.match_losses
    }

    pub fn game_wins(&self) -> u64 {
        self.game_wins
    }

    pub fn game_losses(&self) -> u64 {
        self.game_losses
    }

    pub fn total_points(&self) -> u64 {
        self.total_points
    }

    /// Number of decided matches this record accounts for
    pub fn matches_decided(&self) -> u64 {
        self.match_wins.saturating_add(self.match_losses)
    }

    pub(crate) fn add_points(&mut self, points: u64) {
        self.total_points = self.total_points.saturating_add(points);
    }

    pub(crate) fn add_games(&mut self, won: u64, lost: u64) {
        self.game_wins = self.game_wins.saturating_add(won);
        self.game_losses = self.game_losses.saturating_add(lost);
    }

    pub(crate) fn add_match_win(&mut self) {
        self.match_wins = self.match_wins.saturating_add(1);
    }

    pub(crate) fn add_match_loss(&mut self) {
        self.match_losses = self.match_losses.saturating_add(1);
    }

    /// Sum another partial record for the same player into this one
    pub(crate) fn merge(&mut self, other: &Record) {
        debug_assert_eq!(self.player, other.player);
        self.match_wins = self.match_wins.saturating_add(other.match_wins);
        self.match_losses = self.match_losses.saturating_add(other.match_losses);
        self.game_wins = self.game_wins.saturating_add(other.game_wins);
        self.game_losses = self.game_losses.saturating_add(other.game_losses);
        self.add_points(other.total_points);
    }
}
