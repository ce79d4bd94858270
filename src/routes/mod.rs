use crate::handlers::{
    auth::{login, register},
    health::health_check,
    matches::{all_matches, create_match},
    player::{add_player, all_players, get_player},
    team::{all_teams, create_team},
};
use crate::middleware::timing::response_timer;
use crate::state::AppState;
use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Assembles the whole app. Tests call this too, with their own `AppState`,
/// so what they exercise is exactly what production serves.
///
/// Paths are flat (`/create_team`, not `/teams`) — that's the published
/// surface and it stays as-is.
pub fn create_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/create_team", post(create_team))
        .route("/all_teams", get(all_teams))
        .route("/add_player", post(add_player))
        .route("/all_players", get(all_players))
        .route("/players/{id}", get(get_player))
        .route("/create_match", post(create_match))
        .route("/all_matches", get(all_matches))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // Outermost layer: times the full stack and stamps response_time_ms
        // into successful JSON bodies.
        .layer(from_fn(response_timer))
        .with_state(state)
}
