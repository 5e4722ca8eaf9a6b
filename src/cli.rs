//! Command-line interface for trivia_leaderboard.

use clap::{Parser, Subcommand};

/// Trivia Leaderboard - ranked score storage for a trivia quiz
#[derive(Parser, Debug)]
#[command(name = "trivia_leaderboard")]
#[command(about = "Leaderboard service for a trivia quiz", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP leaderboard server
    Serve {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Path to the database file (created if it doesn't exist)
        #[arg(long)]
        db_path: Option<String>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Record one score directly in the database
    Record {
        /// Player name
        #[arg(long)]
        player: String,

        /// Number of correctly answered questions
        #[arg(long)]
        score: i64,

        /// Game date (RFC 3339); defaults to now
        #[arg(long)]
        date: Option<chrono::DateTime<chrono::Utc>>,

        /// Path to the database file
        #[arg(long, default_value = "leaderboard.db")]
        db_path: String,
    },

    /// Print the ranked leaderboard
    Show {
        /// Path to the database file
        #[arg(long, default_value = "leaderboard.db")]
        db_path: String,
    },
}
