use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::models::user::{Claims, Role};

/// One-way, salted. Output is a self-describing PHC string, so the salt and
/// parameters travel with the hash and verification needs nothing else.
pub fn hash_password(plaintext: &str) -> Result<String, password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(plaintext.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// A mismatch is `Ok(false)`; only a hash we can't even parse is an `Err`.
/// Callers fold both into the same "Invalid credentials" anyway, but the
/// distinction matters for logging — a corrupt stored hash is our bug.
pub fn verify_password(plaintext: &str, hash: &str) -> Result<bool, password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    Ok(Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed)
        .is_ok())
}

/// Mints an HS256 token carrying `{user_id, role, exp}`. Expiry is always
/// set — how long is config, whether is not.
pub fn create_access_token(
    user_id: Uuid,
    role: Role,
    config: &AuthConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let exp = chrono::Utc::now().timestamp() + config.token_ttl_secs;

    let claims = Claims {
        user_id: user_id.to_string(),
        role,
        exp,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_ref()),
    )
}

/// Verifies signature, structure, and expiry in one go. Callers don't get to
/// know which of the three failed — the error collapses into a single
/// "invalid or expired token" at the boundary.
pub fn decode_token(
    token: &str,
    config: &AuthConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_ref()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}
