//! Explicit success/failure result of a leaderboard operation.

use crate::LeaderboardError;

/// Result of a leaderboard operation.
///
/// Operations never return `Err` to their caller; every failure, whether a
/// rejected submission or a storage fault, lands in [`Outcome::Failure`]
/// where it can be inspected but carries no data.
#[derive(Debug, Clone)]
#[must_use]
pub enum Outcome<T> {
    /// The operation completed.
    Success(T),
    /// The operation did nothing.
    Failure(LeaderboardError),
}

impl<T> Outcome<T> {
    /// Returns `true` if the operation completed.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Borrows the success data, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    /// Consumes the outcome, returning the success data, if any.
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the failure reason, if any.
    pub fn failure(&self) -> Option<&LeaderboardError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(err) => Some(err),
        }
    }
}
