use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub users: usize,
    pub teams: usize,
    pub players: usize,
    pub matches: usize,
}

/// Simple health check endpoint.
///
/// Used by load balancers and monitoring to know the service is still alive.
/// The collection counts double as a sanity readout — an in-process store
/// can't really be "down", but watching the counts move is cheap visibility.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "GamePlan is healthy!".to_string(),
        users: state.db.users.len(),
        teams: state.db.teams.len(),
        players: state.db.players.len(),
        matches: state.db.matches.len(),
    };

    (StatusCode::OK, Json(response))
}
