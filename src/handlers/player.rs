use axum::{Json, extract::Path, extract::State};
use serde_json::{Value, json};
use uuid::Uuid;

use crate::errors::AppError;
use crate::middleware::auth::{CurrentUser, require_role};
use crate::models::player::{CreatePlayerRequest, Player};
use crate::models::user::Role;
use crate::state::AppState;

/// POST /add_player — admin or coach.
///
/// Check order is deliberate: role first (cheapest, security-relevant), then
/// the referential check on the team, then uniqueness within that team.
pub async fn add_player(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CreatePlayerRequest>,
) -> Result<Json<Value>, AppError> {
    // 1. Role check
    require_role(
        &user,
        &[Role::Admin, Role::Coach],
        "Only admins or coaches can add players",
    )?;

    // 2. Input validation
    crate::utils::validation::validate_player_age(payload.age).map_err(AppError::Validation)?;

    // 3. Referential check: the team must exist
    if state.db.teams.get(payload.team_id).is_none() {
        tracing::warn!(team_id = %payload.team_id, "Player creation failed: team not found");
        return Err(AppError::NotFound("Team not found".to_string()));
    }

    // 4. Uniqueness: same name twice in the same team is a duplicate,
    // the same name in another team is fine.
    let (name, team_id) = (payload.name.clone(), payload.team_id);
    if state
        .db
        .players
        .find_one(|p| p.name == name && p.team_id == team_id)
        .is_some()
    {
        tracing::warn!(player = %payload.name, team_id = %payload.team_id, "Player creation failed: already in team");
        return Err(AppError::Conflict(format!(
            "Player {} already exists in this team",
            payload.name
        )));
    }

    // 5. Insert, keyed by (name, team_id)
    let player_id = state
        .db
        .players
        .insert_unique(format!("{}:{}", payload.name, payload.team_id), |id| Player {
            id,
            name: payload.name.clone(),
            age: payload.age,
            position: payload.position.clone(),
            team_id: payload.team_id,
        })
        .map_err(|_| {
            tracing::warn!(player = %payload.name, team_id = %payload.team_id, "Player creation failed: already in team");
            AppError::Conflict(format!(
                "Player {} already exists in this team",
                payload.name
            ))
        })?;

    tracing::info!(player = %payload.name, by = %user.email, "Player created successfully");

    Ok(Json(json!({
        "message": "Player created successfully",
        "player_id": player_id.to_string(),
    })))
}

/// GET /all_players — any authenticated user.
pub async fn all_players(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Value>, AppError> {
    let players = state.db.players.all();
    tracing::info!(email = %user.email, count = players.len(), "Fetched all players");
    Ok(Json(json!({ "players": players })))
}

/// GET /players/{id} — admin or coach.
pub async fn get_player(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(player_id): Path<Uuid>,
) -> Result<Json<Player>, AppError> {
    require_role(
        &user,
        &[Role::Admin, Role::Coach],
        "Only admins or coaches can view a player",
    )?;

    let player = state.db.players.get(player_id).ok_or_else(|| {
        tracing::warn!(%player_id, "Player not found");
        AppError::NotFound(format!("Player {} not found", player_id))
    })?;

    tracing::info!(email = %user.email, player = %player.name, "Fetched player");
    Ok(Json(player))
}
