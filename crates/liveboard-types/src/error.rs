//! Error types for the liveboard scoreboard engine.
//!
//! All errors use the `LB_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Validation errors (malformed input)
//! - 2xx: Conflict errors (would violate the active-pair uniqueness rule)
//! - 3xx: Lookup errors (unknown match identifier)

use thiserror::Error;

use crate::{MatchId, TeamPair};

/// Central error enum for all scoreboard operations.
#[derive(Debug, Error)]
pub enum ScoreboardError {
    // =================================================================
    // Validation Errors (1xx)
    // =================================================================
    /// A team name was empty or whitespace-only.
    #[error("LB_ERR_100: Team names must not be blank")]
    BlankTeamName,

    /// The same team was given for both sides.
    #[error("LB_ERR_101: A team cannot play itself: {name}")]
    IdenticalTeams { name: String },

    // =================================================================
    // Conflict Errors (2xx)
    // =================================================================
    /// An active match between the same two teams already exists,
    /// regardless of home/away orientation.
    #[error("LB_ERR_200: A match between these teams is already in progress: {0}")]
    MatchAlreadyStarted(TeamPair),

    // =================================================================
    // Lookup Errors (3xx)
    // =================================================================
    /// No active match carries the given identifier.
    #[error("LB_ERR_300: Match not found: {0}")]
    MatchNotFound(MatchId),
}

/// Coarse error classification: which contract an operation violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    Conflict,
    NotFound,
}

impl ScoreboardError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::BlankTeamName | Self::IdenticalTeams { .. } => ErrorKind::Validation,
            Self::MatchAlreadyStarted(_) => ErrorKind::Conflict,
            Self::MatchNotFound(_) => ErrorKind::NotFound,
        }
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, ScoreboardError>;
