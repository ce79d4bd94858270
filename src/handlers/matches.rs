use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::errors::AppError;
use crate::middleware::auth::{CurrentUser, require_role};
use crate::models::matches::{CreateMatchRequest, Match};
use crate::models::user::Role;
use crate::state::AppState;

/// POST /create_match — admin only.
pub async fn create_match(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CreateMatchRequest>,
) -> Result<Json<Value>, AppError> {
    // 1. Role check
    require_role(&user, &[Role::Admin], "Only admins can schedule matches")?;

    // 2. Referential checks: both teams must resolve
    let home_team = state.db.teams.get(payload.home_team_id);
    let away_team = state.db.teams.get(payload.away_team_id);

    let (Some(home_team), Some(away_team)) = (home_team, away_team) else {
        tracing::warn!(
            home_team_id = %payload.home_team_id,
            away_team_id = %payload.away_team_id,
            "Match creation failed: one or both teams not found"
        );
        return Err(AppError::Validation(
            "One or both teams not found".to_string(),
        ));
    };

    // 3. Semantic check: a team can't play itself
    if payload.home_team_id == payload.away_team_id {
        tracing::warn!(team_id = %payload.home_team_id, "Match creation failed: same team on both sides");
        return Err(AppError::Validation(
            "A team cannot play against itself".to_string(),
        ));
    }

    // 4. Insert — matches carry no uniqueness constraint (a rematch on
    // another date is a different match; so is a double-header, apparently)
    let match_id = state.db.matches.insert_one(|id| Match {
        id,
        home_team_id: payload.home_team_id,
        away_team_id: payload.away_team_id,
        date: payload.date,
        location: payload.location.clone(),
    });

    tracing::info!(
        home = %home_team.name,
        away = %away_team.name,
        date = %payload.date,
        by = %user.email,
        "Match scheduled successfully"
    );

    Ok(Json(json!({
        "message": "Match scheduled successfully",
        "match_id": match_id.to_string(),
    })))
}

/// GET /all_matches — any authenticated user.
pub async fn all_matches(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Value>, AppError> {
    let matches = state.db.matches.all();
    tracing::info!(email = %user.email, count = matches.len(), "Fetched all matches");
    Ok(Json(json!({ "matches": matches })))
}
