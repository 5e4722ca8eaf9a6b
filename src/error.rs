//! Service-level error types.

use derive_more::{Display, Error, From};
use tracing::instrument;

use crate::DbError;

/// Why a score submission was rejected before reaching storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ValidationErrorKind {
    /// Player name was absent or empty.
    #[display("player name is missing")]
    MissingPlayerName,
    /// Score was absent.
    #[display("score is missing")]
    MissingScore,
    /// Score was below zero.
    #[display("score {} is negative", _0)]
    NegativeScore(i64),
    /// Score does not fit the storage column.
    #[display("score {} is out of range", _0)]
    ScoreOutOfRange(i64),
}

/// Validation error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Validation error: {} at {}:{}", kind, file, line)]
pub struct ValidationError {
    /// What was wrong with the submission.
    pub kind: ValidationErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ValidationError {
    /// Creates a new validation error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Failure reported by a leaderboard operation.
#[derive(Debug, Clone, Display, Error, From)]
pub enum LeaderboardError {
    /// The submission was rejected before any storage access.
    #[display("{}", _0)]
    Validation(ValidationError),
    /// The store failed to complete the query.
    #[display("{}", _0)]
    Storage(DbError),
}

impl LeaderboardError {
    /// Returns the validation kind if this is a validation failure.
    pub fn validation_kind(&self) -> Option<ValidationErrorKind> {
        match self {
            Self::Validation(err) => Some(err.kind),
            Self::Storage(_) => None,
        }
    }

    /// Returns `true` for storage failures.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}
