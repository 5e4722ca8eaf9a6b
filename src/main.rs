//! Trivia Leaderboard - Unified CLI
//!
//! Serves the leaderboard over HTTP or reads and writes it directly.

#![warn(missing_docs)]

mod cli;

use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Parser;
use cli::{Cli, Command};
use tracing::{info, instrument, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use trivia_leaderboard::{
    LeaderboardRepository, LeaderboardService, Outcome, ScoreSubmission, ServerConfig, server,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            config,
            db_path,
            host,
            port,
        } => run_server(config, db_path, host, port).await,
        Command::Record {
            player,
            score,
            date,
            db_path,
        } => run_record(player, score, date, db_path).await,
        Command::Show { db_path } => run_show(db_path).await,
    }
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,trivia_leaderboard=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Builds a service over the SQLite database at `db_path`.
#[instrument]
fn open_service(db_path: &str) -> Result<LeaderboardService> {
    let repository = LeaderboardRepository::open(db_path)?;
    info!(db_path = repository.db_path(), "Leaderboard database ready");
    Ok(LeaderboardService::new(Arc::new(repository)))
}

/// Run the HTTP leaderboard server
#[instrument(skip_all)]
async fn run_server(
    config_path: Option<std::path::PathBuf>,
    db_path: Option<String>,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => ServerConfig::from_file(path)?,
        None => ServerConfig::default(),
    }
    .with_env_overrides()?;

    if let Some(db_path) = db_path {
        config = config.with_db_path(db_path);
    }
    if let Some(host) = host {
        config = config.with_host(host);
    }
    if let Some(port) = port {
        config = config.with_port(port);
    }

    info!(?config, "Starting leaderboard server");
    let service = open_service(config.db_path())?;

    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port())).await?;
    info!("Server ready at http://{}:{}/", config.host(), config.port());

    server::serve(listener, service).await?;
    Ok(())
}

/// Record one score directly
#[instrument]
async fn run_record(
    player: String,
    score: i64,
    date: Option<DateTime<Utc>>,
    db_path: String,
) -> Result<()> {
    let service = open_service(&db_path)?;

    let mut submission = ScoreSubmission::new(player, score);
    if let Some(date) = date {
        submission = submission.with_date(date);
    }

    match service.record(submission).await {
        Outcome::Success(entry) => {
            println!(
                "Recorded #{}: {} scored {} at {}",
                entry.id(),
                entry.player_name(),
                entry.score(),
                entry.date_utc().to_rfc3339()
            );
            Ok(())
        }
        Outcome::Failure(err) => {
            warn!(error = %err, "Score not recorded");
            Err(anyhow::anyhow!("Score not recorded: {}", err))
        }
    }
}

/// Print the ranked leaderboard
#[instrument]
async fn run_show(db_path: String) -> Result<()> {
    let service = open_service(&db_path)?;

    match service.fetch_ranked().await {
        Outcome::Success(entries) => {
            if entries.is_empty() {
                println!("Leaderboard is empty");
            }
            for (rank, entry) in entries.iter().enumerate() {
                println!(
                    "{:>3}. {:<20} {:>4}  {}",
                    rank + 1,
                    entry.player_name(),
                    entry.score(),
                    entry.date_utc().format("%Y-%m-%d %H:%M:%S")
                );
            }
            Ok(())
        }
        Outcome::Failure(err) => Err(anyhow::anyhow!("Leaderboard unavailable: {}", err)),
    }
}
