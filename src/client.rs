//! Typed HTTP client for the leaderboard API.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument};

use crate::{AddPlayerLeaderboardResponse, GetLeaderboardResponse, ScoreSubmission};

/// HTTP client for a running leaderboard server.
///
/// The server reports service failures in-band, so `Ok` responses may still
/// carry `success: false`. `Err` means the request itself did not complete.
#[derive(Debug, Clone)]
pub struct LeaderboardClient {
    base_url: String,
    client: reqwest::Client,
}

impl LeaderboardClient {
    /// Creates a client for the server at `base_url` (e.g. `http://127.0.0.1:3000`).
    #[instrument(skip_all, fields(base_url = %base_url.as_ref()))]
    pub fn new(base_url: impl AsRef<str>) -> Self {
        let base_url = base_url.as_ref().trim_end_matches('/').to_string();
        debug!("Creating LeaderboardClient");
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    fn leaderboard_url(&self) -> String {
        format!("{}/leaderboard", self.base_url)
    }

    /// Submits a finished game's score.
    #[instrument(skip(self))]
    pub async fn add_player_leaderboard(
        &self,
        player_name: &str,
        score: i64,
        date: Option<DateTime<Utc>>,
    ) -> Result<AddPlayerLeaderboardResponse> {
        let mut submission = ScoreSubmission::new(player_name, score);
        if let Some(date) = date {
            submission = submission.with_date(date);
        }
        self.submit(&submission).await
    }

    /// Posts an arbitrary submission, including incomplete ones.
    #[instrument(skip(self, submission))]
    pub async fn submit(&self, submission: &ScoreSubmission) -> Result<AddPlayerLeaderboardResponse> {
        let response = self
            .client
            .post(self.leaderboard_url())
            .json(submission)
            .send()
            .await
            .context("Failed to send score submission")?
            .error_for_status()
            .context("Server rejected score submission")?
            .json::<AddPlayerLeaderboardResponse>()
            .await
            .context("Failed to decode submission response")?;

        info!(success = response.success, "Score submitted");
        Ok(response)
    }

    /// Fetches the ranked leaderboard.
    #[instrument(skip(self))]
    pub async fn get_leaderboard(&self) -> Result<GetLeaderboardResponse> {
        let response = self
            .client
            .get(self.leaderboard_url())
            .send()
            .await
            .context("Failed to request leaderboard")?
            .error_for_status()
            .context("Server rejected leaderboard request")?
            .json::<GetLeaderboardResponse>()
            .await
            .context("Failed to decode leaderboard response")?;

        info!(
            success = response.success,
            count = response.leaderboard.len(),
            "Leaderboard fetched"
        );
        Ok(response)
    }
}
