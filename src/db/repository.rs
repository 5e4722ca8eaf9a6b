//! SQLite-backed leaderboard repository.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument};

use crate::LeaderboardStore;
use crate::db::{DbError, LeaderboardEntry, NewLeaderboardEntry, schema};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Database repository for leaderboard entries.
///
/// Holds a single connection, opened once and shared by every call made
/// through this repository (and its clones). There is no pool and no
/// reconnect: if the connection goes bad, calls fail.
#[derive(Clone)]
pub struct LeaderboardRepository {
    db_path: String,
    conn: Arc<Mutex<SqliteConnection>>,
}

impl std::fmt::Debug for LeaderboardRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeaderboardRepository")
            .field("db_path", &self.db_path)
            .finish_non_exhaustive()
    }
}

impl LeaderboardRepository {
    /// Opens the database at the given path and applies pending migrations.
    ///
    /// Use `":memory:"` for an in-memory database (useful for tests).
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the connection cannot be established or the
    /// schema cannot be applied.
    #[instrument(skip(db_path))]
    pub fn open(db_path: impl Into<String>) -> Result<Self, DbError> {
        let db_path = db_path.into();
        info!(path = %db_path, "Opening LeaderboardRepository");

        let mut conn = SqliteConnection::establish(&db_path)
            .map_err(|e| DbError::new(format!("Failed to connect to '{}': {}", db_path, e)))?;

        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| DbError::new(format!("Migrations failed: {}", e)))?;
        debug!(count = applied.len(), "Migrations applied");

        Ok(Self {
            db_path,
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Returns the path this repository was opened with.
    pub fn db_path(&self) -> &str {
        &self.db_path
    }

    fn connection(&self) -> Result<MutexGuard<'_, SqliteConnection>, DbError> {
        self.conn
            .lock()
            .map_err(|_| DbError::new("Connection lock poisoned"))
    }

    /// Inserts one entry and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self, entry), fields(player_name = %entry.player_name(), score = entry.score()))]
    pub fn insert_entry(&self, entry: NewLeaderboardEntry) -> Result<LeaderboardEntry, DbError> {
        debug!("Inserting leaderboard entry");
        let mut conn = self.connection()?;

        let stored = diesel::insert_into(schema::leaderboard::table)
            .values(&entry)
            .returning(LeaderboardEntry::as_returning())
            .get_result(&mut *conn)?;

        info!(
            entry_id = stored.id(),
            player_name = %stored.player_name(),
            score = stored.score(),
            "Leaderboard entry stored"
        );
        Ok(stored)
    }

    /// Loads every entry in storage order (ascending id).
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn load_all(&self) -> Result<Vec<LeaderboardEntry>, DbError> {
        debug!("Loading all leaderboard entries");
        let mut conn = self.connection()?;

        let entries = schema::leaderboard::table
            .select(LeaderboardEntry::as_select())
            .order(schema::leaderboard::id.asc())
            .load(&mut *conn)?;

        info!(count = entries.len(), "Leaderboard entries loaded");
        Ok(entries)
    }
}

#[async_trait]
impl LeaderboardStore for LeaderboardRepository {
    async fn insert(&self, entry: NewLeaderboardEntry) -> Result<LeaderboardEntry, DbError> {
        let repo = self.clone();
        tokio::task::spawn_blocking(move || repo.insert_entry(entry)).await?
    }

    async fn all_entries(&self) -> Result<Vec<LeaderboardEntry>, DbError> {
        let repo = self.clone();
        tokio::task::spawn_blocking(move || repo.load_all()).await?
    }
}
