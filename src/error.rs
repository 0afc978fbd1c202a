//! Error types for standings computation
//!
//! Library functions return `anyhow`-backed results; the concrete
//! [`RankingError`] variants can be recovered with `downcast_ref`.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for ranking scenarios
#[derive(Debug, thiserror::Error)]
pub enum RankingError {
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("Invalid match at index {index}: {reason}")]
    InvalidMatch { index: usize, reason: String },

    #[error("Unknown ranking criterion: {name}")]
    UnknownCriterion { name: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}

impl RankingError {
    /// Shorthand for a [`RankingError::InvalidArgument`] with the given reason
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

/// Returns true when `err` carries a [`RankingError::InvalidArgument`]
pub fn is_invalid_argument(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<RankingError>(),
        Some(RankingError::InvalidArgument { .. })
    )
}
