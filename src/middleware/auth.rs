use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::{Role, User};
use crate::state::AppState;
use crate::utils::auth::decode_token;

/// The resolved caller: the *full* user record, not just the claims.
///
/// Use this as a handler parameter and Axum will automatically:
/// 1. Extract the Authorization header
/// 2. Verify the JWT signature and expiry
/// 3. Look the user up in the store by the token's user_id
/// 4. Hand the handler a `CurrentUser`, or short-circuit with 401
///
/// The store lookup matters: a token can be cryptographically fine while the
/// user behind it is gone. Role checks downstream use the stored role, so
/// what's authoritative is the record, not whatever the token claims.
pub struct CurrentUser(pub User);

/// Set-membership role check. Each endpoint declares its allowed roles as a
/// slice and passes the denial message its callers already depend on.
pub fn require_role(user: &User, allowed: &[Role], denial: &str) -> Result<(), AppError> {
    if allowed.contains(&user.role) {
        return Ok(());
    }
    tracing::warn!(
        email = %user.email,
        role = user.role.as_str(),
        "Unauthorized attempt: {}",
        denial
    );
    Err(AppError::Forbidden(denial.to_string()))
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // 1. Extract token from Authorization header
        // Expected format: "Bearer <token>"
        let auth_header = parts
            .headers
            .get("Authorization")
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                AppError::Authentication("Missing Authorization header".to_string())
            })?;

        let Some(token) = auth_header.strip_prefix("Bearer ") else {
            return Err(AppError::Authentication(
                "Invalid Authorization header format".to_string(),
            ));
        };

        // 2. Decode and verify the JWT.
        // Signature, structure and expiry all funnel into one 401 — callers
        // don't learn which part of the token was bad.
        let claims = decode_token(token, &state.auth).map_err(|e| {
            tracing::warn!("Token rejected: {}", e);
            AppError::Authentication("Invalid or expired token".to_string())
        })?;

        // 3. The token must actually name someone.
        let user_id = Uuid::parse_str(&claims.user_id).map_err(|_| {
            tracing::warn!("Token carried a malformed user_id claim");
            AppError::Authentication("Invalid token".to_string())
        })?;

        // 4. Resolve the full record. A valid token for a vanished user is
        // still a 401.
        let user = state.db.users.get(user_id).ok_or_else(|| {
            tracing::warn!(%user_id, "Token user not found in store");
            AppError::Authentication("User not found".to_string())
        })?;

        Ok(CurrentUser(user))
    }
}
