//! JSON API over the leaderboard service.

use axum::{
    Json, Router,
    body::Body,
    extract::State,
    http::Request,
    routing::get,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tracing::{debug, info, instrument};

use crate::{
    AddPlayerLeaderboardResponse, GetLeaderboardResponse, LeaderboardService, ScoreSubmission,
};

/// Builds the HTTP router.
///
/// - `POST /leaderboard` records a score and answers `{ "success": bool }`.
/// - `GET /leaderboard` answers `{ "success": bool, "leaderboard": [...] }`.
/// - `GET /health` answers `ok`.
///
/// Service failures are reported in the body with status 200.
#[instrument(skip(service))]
pub fn router(service: LeaderboardService) -> Router {
    Router::new()
        .route(
            "/leaderboard",
            get(get_leaderboard).post(add_player_leaderboard),
        )
        .route("/health", get(health))
        .layer(ServiceBuilder::new().map_request(log_request))
        .with_state(service)
}

/// Serves the router on an already bound listener until the process exits.
///
/// # Errors
///
/// Returns an I/O error if the server fails.
#[instrument(skip_all)]
pub async fn serve(listener: TcpListener, service: LeaderboardService) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "Leaderboard server listening");
    }
    axum::serve(listener, router(service)).await
}

fn log_request(req: Request<Body>) -> Request<Body> {
    info!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
    req
}

async fn add_player_leaderboard(
    State(service): State<LeaderboardService>,
    Json(submission): Json<ScoreSubmission>,
) -> Json<AddPlayerLeaderboardResponse> {
    let outcome = service.record(submission).await;
    debug!(success = outcome.is_success(), "Record request handled");
    Json(AddPlayerLeaderboardResponse::from(&outcome))
}

async fn get_leaderboard(State(service): State<LeaderboardService>) -> Json<GetLeaderboardResponse> {
    let outcome = service.fetch_ranked().await;
    debug!(success = outcome.is_success(), "Leaderboard request handled");
    Json(GetLeaderboardResponse::from(outcome))
}

async fn health() -> &'static str {
    "ok"
}
