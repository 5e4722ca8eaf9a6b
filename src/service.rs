//! Leaderboard business logic layer.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error, info, instrument, warn};

use crate::ranking::rank_entries;
use crate::{LeaderboardEntry, LeaderboardError, LeaderboardStore, Outcome, ScoreSubmission};

/// Service layer for recording and ranking quiz scores.
///
/// Wraps an injected [`LeaderboardStore`] with validation and the ranking
/// rule. Both operations always resolve: failures come back as
/// [`Outcome::Failure`] and are logged here.
#[derive(Clone)]
pub struct LeaderboardService {
    store: Arc<dyn LeaderboardStore>,
}

impl std::fmt::Debug for LeaderboardService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeaderboardService").finish_non_exhaustive()
    }
}

impl LeaderboardService {
    /// Creates a new leaderboard service backed by the given store.
    #[instrument(skip(store))]
    pub fn new(store: Arc<dyn LeaderboardStore>) -> Self {
        info!("Creating LeaderboardService");
        Self { store }
    }

    /// Records one game's result.
    ///
    /// When the submission carries no date, the current time is used. On
    /// success the stored entry, with its assigned id, is returned.
    #[instrument(skip(self, submission), fields(player_name = ?submission.player_name(), score = ?submission.score()))]
    pub async fn record(&self, submission: ScoreSubmission) -> Outcome<LeaderboardEntry> {
        debug!("Recording score");

        let entry = match submission.validate(Utc::now()) {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "Score submission rejected");
                return Outcome::Failure(LeaderboardError::from(err));
            }
        };

        match self.store.insert(entry).await {
            Ok(stored) => {
                info!(entry_id = stored.id(), "Score recorded");
                Outcome::Success(stored)
            }
            Err(err) => {
                error!(error = %err, "Failed to record score");
                Outcome::Failure(LeaderboardError::from(err))
            }
        }
    }

    /// Returns every entry ordered by score, then date, both descending.
    #[instrument(skip(self))]
    pub async fn fetch_ranked(&self) -> Outcome<Vec<LeaderboardEntry>> {
        debug!("Fetching ranked leaderboard");

        match self.store.all_entries().await {
            Ok(entries) => {
                let ranked = rank_entries(entries);
                info!(count = ranked.len(), "Leaderboard ranked");
                Outcome::Success(ranked)
            }
            Err(err) => {
                error!(error = %err, "Failed to load leaderboard");
                Outcome::Failure(LeaderboardError::from(err))
            }
        }
    }
}
