//! Caller input for recording a score.

use chrono::{DateTime, Utc};
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{NewLeaderboardEntry, ValidationError, ValidationErrorKind};

/// A score as submitted by the quiz, before validation.
///
/// Every field is optional so that an absent score is distinguishable from a
/// score of zero. Deserializes from the JSON body
/// `{ "playerName": ..., "score": ..., "date": ... }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[setters(strip_option, prefix = "with_")]
pub struct ScoreSubmission {
    #[serde(default)]
    player_name: Option<String>,
    #[serde(default)]
    score: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    date: Option<DateTime<Utc>>,
}

impl ScoreSubmission {
    /// Creates a submission with a player name and score and no date.
    pub fn new(player_name: impl Into<String>, score: i64) -> Self {
        Self {
            player_name: Some(player_name.into()),
            score: Some(score),
            date: None,
        }
    }

    /// Validates the submission into an insertable entry.
    ///
    /// A missing date is stamped with `now`. A score of zero is valid; only an
    /// absent score is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the player name is absent or empty, or
    /// the score is absent, negative or too large to store.
    #[instrument(skip(self), fields(player_name = ?self.player_name, score = ?self.score))]
    pub fn validate(self, now: DateTime<Utc>) -> Result<NewLeaderboardEntry, ValidationError> {
        let player_name = match self.player_name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(ValidationError::new(ValidationErrorKind::MissingPlayerName)),
        };

        let score = match self.score {
            None => return Err(ValidationError::new(ValidationErrorKind::MissingScore)),
            Some(score) if score < 0 => {
                return Err(ValidationError::new(ValidationErrorKind::NegativeScore(score)));
            }
            Some(score) => i32::try_from(score)
                .map_err(|_| ValidationError::new(ValidationErrorKind::ScoreOutOfRange(score)))?,
        };

        let date = self.date.unwrap_or(now);
        debug!(date = %date, "Submission validated");

        Ok(NewLeaderboardEntry::new(player_name, score, date.naive_utc()))
    }
}
