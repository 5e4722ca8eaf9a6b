//! Ranking rule: score descending, then date descending.

use std::cmp::Ordering;

use tracing::instrument;

use crate::LeaderboardEntry;

/// Orders two entries by the ranking rule.
///
/// Higher scores come first; among equal scores, the more recent date comes
/// first. Entries equal on both keys compare as [`Ordering::Equal`].
pub fn compare_entries(first: &LeaderboardEntry, second: &LeaderboardEntry) -> Ordering {
    second
        .score()
        .cmp(first.score())
        .then_with(|| second.date().cmp(first.date()))
}

/// Sorts entries by the ranking rule.
///
/// The sort is stable, so entries tied on both score and date keep the
/// order the store returned them in.
#[instrument(skip(entries), fields(count = entries.len()))]
pub fn rank_entries(mut entries: Vec<LeaderboardEntry>) -> Vec<LeaderboardEntry> {
    entries.sort_by(compare_entries);
    entries
}
