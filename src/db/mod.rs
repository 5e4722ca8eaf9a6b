//! Database persistence layer for leaderboard entries.

mod error;
mod models;
mod repository;
mod schema; // Diesel generated schema - internal use only

pub use error::DbError;
pub use models::{LeaderboardEntry, NewLeaderboardEntry};
pub use repository::LeaderboardRepository;
