//! Wire responses for the two caller entry points.

use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::{LeaderboardEntry, Outcome};

/// Response to a score submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct AddPlayerLeaderboardResponse {
    /// Whether an entry was stored.
    pub success: bool,
}

impl<T> From<&Outcome<T>> for AddPlayerLeaderboardResponse {
    fn from(outcome: &Outcome<T>) -> Self {
        Self::new(outcome.is_success())
    }
}

/// Response carrying the ranked leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct GetLeaderboardResponse {
    /// Whether the leaderboard could be loaded.
    pub success: bool,
    /// Ranked entries; empty on failure.
    pub leaderboard: Vec<LeaderboardEntry>,
}

impl From<Outcome<Vec<LeaderboardEntry>>> for GetLeaderboardResponse {
    fn from(outcome: Outcome<Vec<LeaderboardEntry>>) -> Self {
        match outcome {
            Outcome::Success(leaderboard) => Self::new(true, leaderboard),
            Outcome::Failure(_) => Self::new(false, Vec::new()),
        }
    }
}
