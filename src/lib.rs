//! Trivia leaderboard - ranked score storage for a trivia quiz
//!
//! A quiz records each finished game's score here and later reads every
//! score back, ranked by score and then by date, most recent first.
//!
//! # Architecture
//!
//! - **Service**: [`LeaderboardService`] validates submissions and ranks results
//! - **Store**: [`LeaderboardStore`] seam, implemented for SQLite by [`LeaderboardRepository`]
//! - **Server**: JSON API over the service (axum)
//! - **Client**: [`LeaderboardClient`] for talking to a running server
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use trivia_leaderboard::{LeaderboardRepository, LeaderboardService, ScoreSubmission};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let repository = LeaderboardRepository::open("leaderboard.db")?;
//! let service = LeaderboardService::new(Arc::new(repository));
//!
//! let outcome = service.record(ScoreSubmission::new("Alice", 7)).await;
//! assert!(outcome.is_success());
//!
//! let ranked = service.fetch_ranked().await;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod client;
mod config;
mod db;
mod error;
mod outcome;
mod response;
mod service;
mod store;
mod submission;

pub mod ranking;
pub mod server;

// Crate-level exports - Persistence
pub use db::{DbError, LeaderboardEntry, LeaderboardRepository, NewLeaderboardEntry};

// Crate-level exports - Service
pub use error::{LeaderboardError, ValidationError, ValidationErrorKind};
pub use outcome::Outcome;
pub use service::LeaderboardService;
pub use store::LeaderboardStore;
pub use submission::ScoreSubmission;

// Crate-level exports - Wire types and client
pub use client::LeaderboardClient;
pub use response::{AddPlayerLeaderboardResponse, GetLeaderboardResponse};

// Crate-level exports - Configuration
pub use config::{ConfigError, DB_PATH_ENV, HOST_ENV, PORT_ENV, ServerConfig};
