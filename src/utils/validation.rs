use regex::Regex;
use std::sync::OnceLock;

/// Validates a registration payload before anything touches the store.
///
/// Rules:
/// 1. Username must not be empty (or whitespace-only)
/// 2. Email must look like an email
/// 3. Password must be at least 6 characters
pub fn validate_registration(username: &str, email: &str, password: &str) -> Result<(), String> {
    if username.trim().is_empty() {
        return Err("Username must not be empty".to_string());
    }

    validate_email(email)?;

    // 6 is the floor the API has always promised. Raising it would be nice,
    // but that's a contract change, not a validation tweak.
    if password.len() < 6 {
        return Err("Password must be at least 6 characters long".to_string());
    }

    Ok(())
}

/// Shallow email shape check: something, an @, something, a dot, something.
/// Real validation is "we sent you a mail and you clicked it" — this just
/// rejects obvious garbage before it becomes a unique key in the store.
/// OnceLock because compiling regexes on every request is silly.
pub fn validate_email(email: &str) -> Result<(), String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

    if !re.is_match(email) {
        return Err(format!("Invalid email address: {}", email));
    }

    Ok(())
}

/// Players must have a positive age. The field is unsigned, so the only
/// invalid value left to catch is zero.
pub fn validate_player_age(age: u32) -> Result<(), String> {
    if age == 0 {
        return Err("Player age must be greater than zero".to_string());
    }
    Ok(())
}
