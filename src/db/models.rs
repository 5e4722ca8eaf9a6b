//! Database models for leaderboard entries.

use chrono::{DateTime, NaiveDateTime, Utc};
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::db::schema;

/// One completed game's result, as stored in the `leaderboard` table.
///
/// Entries are append-only: the store assigns `id` on insert and nothing
/// mutates a row afterwards.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Queryable,
    Identifiable,
    Selectable,
    Getters,
    Serialize,
    Deserialize,
    new,
)]
#[diesel(table_name = schema::leaderboard)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    id: i32,
    player_name: String,
    score: i32,
    #[serde(with = "utc_timestamp")]
    date: NaiveDateTime,
}

impl LeaderboardEntry {
    /// Returns the entry date as a UTC timestamp.
    #[instrument(skip(self), fields(id = self.id))]
    pub fn date_utc(&self) -> DateTime<Utc> {
        self.date.and_utc()
    }
}

/// Insertable entry built from a validated score submission.
#[derive(Debug, Clone, PartialEq, Eq, Insertable, new, Getters)]
#[diesel(table_name = schema::leaderboard)]
pub struct NewLeaderboardEntry {
    player_name: String,
    score: i32,
    date: NaiveDateTime,
}

/// Serde adapter writing naive UTC timestamps as RFC 3339 strings.
mod utc_timestamp {
    use chrono::{DateTime, NaiveDateTime, SecondsFormat};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.and_utc().to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| parsed.naive_utc())
            .map_err(serde::de::Error::custom)
    }
}
