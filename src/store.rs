//! Storage seam for the leaderboard service.

use async_trait::async_trait;

use crate::{DbError, LeaderboardEntry, NewLeaderboardEntry};

/// Persistence backing a [`LeaderboardService`](crate::LeaderboardService).
///
/// Implementations issue exactly two logical queries: insert one row, and
/// select every row. Ordering of the returned rows is the store's own; the
/// service ranks them.
#[async_trait]
pub trait LeaderboardStore: Send + Sync {
    /// Appends one entry, returning it with its assigned id.
    async fn insert(&self, entry: NewLeaderboardEntry) -> Result<LeaderboardEntry, DbError>;

    /// Returns every stored entry in storage order.
    async fn all_entries(&self) -> Result<Vec<LeaderboardEntry>, DbError>;
}
