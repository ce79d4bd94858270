use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The roles we actually know about. A closed enum instead of loose strings
/// means an unknown role in a request body dies at deserialization, and role
/// checks are set membership instead of string comparisons scattered around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Coach,
    Player,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Coach => "coach",
            Self::Player => "player",
        }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    // Never serialized. The hash isn't a secret in the classic sense, but
    // there is zero reason for it to ever leave the process.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// JWT claim bundle. The claim key is literally `user_id` — that's the wire
/// format existing clients decode, so it stays `user_id` rather than `sub`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: String,
    pub role: Role,
    pub exp: i64,
}
