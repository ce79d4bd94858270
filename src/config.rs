use std::env;

/// Auth knobs, read once at startup and carried in `AppState`.
///
/// Handlers never touch `env::var` directly — everything they need is
/// constructed here and injected. Tests build one of these by hand with a
/// throwaway secret instead of fiddling with process environment.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HS256 shared secret. No default: if JWT_SECRET isn't set, we refuse
    /// to boot rather than sign tokens with something guessable.
    pub jwt_secret: String,
    /// Token lifetime in seconds. Expiry is always on — TOKEN_TTL_SECS just
    /// controls how long. Defaults to 24 hours.
    pub token_ttl_secs: i64,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set");

        let token_ttl_secs = env::var("TOKEN_TTL_SECS")
            .unwrap_or_else(|_| "86400".to_string())
            .parse::<i64>()
            .expect("TOKEN_TTL_SECS must be a number of seconds");

        Self {
            jwt_secret,
            token_ttl_secs,
        }
    }
}
