use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Everything a handler can fail with, in one place.
///
/// Handlers return `Result<Json<Value>, AppError>` and bail with `?` or an
/// early `return Err(...)`. The `IntoResponse` impl below is the only spot
/// where errors turn into status codes and JSON bodies, so the error contract
/// stays consistent across every endpoint instead of being re-invented per
/// handler.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing/invalid/expired token, or the token's user no longer exists.
    #[error("{0}")]
    Authentication(String),

    /// Login failure. Deliberately one message for "no such email" and
    /// "wrong password" so the endpoint can't be used to enumerate users.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Authenticated, but the role doesn't cut it.
    #[error("{0}")]
    Forbidden(String),

    /// A requested or referenced record doesn't exist.
    #[error("{0}")]
    NotFound(String),

    /// Uniqueness violation (duplicate email, team name, player-in-team).
    #[error("{0}")]
    Conflict(String),

    /// The request body is well-formed JSON but semantically bad
    /// (short password, zero age, a team playing itself, ...).
    #[error("{0}")]
    Validation(String),

    /// Infrastructure fault. The message here is the *public* one
    /// ("Team creation failed"); the real cause gets logged at the point
    /// of detection and never reaches the caller.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Authentication(_) | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            // Conflicts map to 400, not 409. That's the published contract
            // ("duplicate email" is a 400 to callers) and changing it would
            // break existing clients for zero benefit.
            Self::Conflict(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({"error": self.to_string()}))).into_response()
    }
}
