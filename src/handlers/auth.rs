use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::errors::AppError;
use crate::models::user::{LoginRequest, RegisterRequest, TokenResponse, User};
use crate::state::AppState;
use crate::utils::auth::{create_access_token, hash_password, verify_password};
use crate::utils::validation::validate_registration;

/// POST /register — unauthenticated.
///
/// Pipeline: input validation → uniqueness pre-check → hash → conditional
/// insert keyed by email. The pre-check gives the friendly "already exists"
/// message; the keyed insert is what actually guarantees uniqueness when two
/// registrations race.
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<Value>, AppError> {
    // 1. Validate the input before touching anything else
    validate_registration(&payload.username, &payload.email, &payload.password)
        .map_err(AppError::Validation)?;

    // 2. Check if user already exists
    let email = payload.email.clone();
    if state.db.users.find_one(|u| u.email == email).is_some() {
        tracing::warn!(email = %payload.email, "Registration failed: user already exists");
        return Err(AppError::Conflict(format!(
            "User with email {} already exists",
            payload.email
        )));
    }

    // 3. Hash password. A hashing failure is our fault, not the caller's —
    // log the real cause, return the generic 500.
    let password_hash = hash_password(&payload.password).map_err(|e| {
        tracing::error!(email = %payload.email, "Password hashing failed: {}", e);
        AppError::Internal("User registration failed".to_string())
    })?;

    // 4. Create user, keyed by email
    let user_id = state
        .db
        .users
        .insert_unique(payload.email.clone(), |id| User {
            id,
            username: payload.username.clone(),
            email: payload.email.clone(),
            password_hash: password_hash.clone(),
            role: payload.role,
        })
        .map_err(|_| {
            // Lost the race with a concurrent registration for the same
            // email. Same contract as the pre-check.
            tracing::warn!(email = %payload.email, "Registration failed: user already exists");
            AppError::Conflict(format!("User with email {} already exists", payload.email))
        })?;

    tracing::info!(email = %payload.email, role = payload.role.as_str(), "User registered successfully");

    Ok(Json(json!({
        "message": format!("User registered successfully: {}", payload.email),
        "user_id": user_id.to_string(),
    })))
}

/// POST /login — unauthenticated.
///
/// "No such email" and "wrong password" both come back as the same
/// InvalidCredentials 401, so this endpoint can't be used to probe which
/// emails are registered.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    // 1. Fetch user by email
    let email = payload.email.clone();
    let user = state.db.users.find_one(|u| u.email == email).ok_or_else(|| {
        tracing::warn!(email = %payload.email, "Login failed: unknown email");
        AppError::InvalidCredentials
    })?;

    // 2. Verify password. An unparseable stored hash is an infrastructure
    // problem but still surfaces as InvalidCredentials — the caller learns
    // nothing either way.
    let ok = verify_password(&payload.password, &user.password_hash).map_err(|e| {
        tracing::error!(email = %user.email, "Stored password hash is unreadable: {}", e);
        AppError::InvalidCredentials
    })?;

    if !ok {
        tracing::warn!(email = %user.email, "Login failed: password mismatch");
        return Err(AppError::InvalidCredentials);
    }

    // 3. Mint the access token
    let token = create_access_token(user.id, user.role, &state.auth).map_err(|e| {
        tracing::error!(email = %user.email, "Token generation failed: {}", e);
        AppError::Internal("Token generation error".to_string())
    })?;

    tracing::info!(email = %user.email, role = user.role.as_str(), "Login successful");

    Ok(Json(TokenResponse {
        access_token: token,
        token_type: "bearer".to_string(),
    }))
}
