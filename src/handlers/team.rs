use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::errors::AppError;
use crate::middleware::auth::{CurrentUser, require_role};
use crate::models::team::{CreateTeamRequest, Team};
use crate::models::user::Role;
use crate::state::AppState;

/// POST /create_team — admin only.
pub async fn create_team(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CreateTeamRequest>,
) -> Result<Json<Value>, AppError> {
    // 1. Role check
    require_role(&user, &[Role::Admin], "Only admins can create teams")?;

    // 2. Check if team exists
    let name = payload.name.clone();
    if state.db.teams.find_one(|t| t.name == name).is_some() {
        tracing::warn!(team = %payload.name, "Team creation failed: name already exists");
        return Err(AppError::Conflict(format!(
            "Team {} already exists",
            payload.name
        )));
    }

    // 3. Insert, keyed by name. A concurrent duplicate gets the same error
    // as the pre-check.
    let team_id = state
        .db
        .teams
        .insert_unique(payload.name.clone(), |id| Team {
            id,
            name: payload.name.clone(),
            coach: payload.coach.clone(),
            city: payload.city.clone(),
        })
        .map_err(|_| {
            tracing::warn!(team = %payload.name, "Team creation failed: name already exists");
            AppError::Conflict(format!("Team {} already exists", payload.name))
        })?;

    tracing::info!(team = %payload.name, by = %user.email, "Team created successfully");

    Ok(Json(json!({
        "message": "Team created successfully",
        "team_id": team_id.to_string(),
    })))
}

/// GET /all_teams — any authenticated user.
pub async fn all_teams(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Value>, AppError> {
    let teams = state.db.teams.all();
    tracing::info!(email = %user.email, count = teams.len(), "Fetched all teams");
    Ok(Json(json!({ "teams": teams })))
}
