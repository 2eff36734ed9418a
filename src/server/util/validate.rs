//! Field-level input checks shared by the services.

use crate::server::error::AppError;

pub const MAX_EMAIL_LEN: usize = 320;

/// Ensures `value` holds between `min` and `max` characters.
pub fn require_len(field: &str, value: &str, min: usize, max: usize) -> Result<(), AppError> {
    let len = value.chars().count();

    if len < min {
        if min == 1 {
            return Err(AppError::BadRequest(format!("{} is required", field)));
        }
        return Err(AppError::BadRequest(format!(
            "{} must be at least {} characters",
            field, min
        )));
    }
    if len > max {
        return Err(AppError::BadRequest(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }

    Ok(())
}

/// Usernames share the login field with emails, so they may not contain `@`.
pub fn require_username(username: &str) -> Result<(), AppError> {
    require_len("Username", username, 3, 128)?;

    if username.contains('@') {
        return Err(AppError::BadRequest(
            "Username must not contain '@'".to_string(),
        ));
    }

    Ok(())
}

/// Loose structural check: one `@`, a non-empty local part and a dotted domain.
pub fn is_valid_email(email: &str) -> bool {
    if email.len() > MAX_EMAIL_LEN || email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split('.')
            .filter(|label| !label.is_empty())
            .count()
            >= 2
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

pub fn require_email(email: &str) -> Result<(), AppError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(AppError::BadRequest("Invalid email address".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("pilot@example.com"));
        assert!(is_valid_email("first.last+tag@mail.example.co.kr"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in [
            "",
            "pilot",
            "pilot@",
            "@example.com",
            "pilot@example",
            "a@b@c.com",
            "pi lot@example.com",
            "pilot@example.com.",
        ] {
            assert!(!is_valid_email(email), "{email} should be rejected");
        }
    }

    #[test]
    fn length_errors_name_the_field() {
        let err = require_len("Username", "ab", 3, 128).unwrap_err();
        assert_eq!(err.to_string(), "Username must be at least 3 characters");

        let err = require_len("Livery name", "", 1, 256).unwrap_err();
        assert_eq!(err.to_string(), "Livery name is required");

        assert!(require_len("Aircraft", "A320neo", 1, 64).is_ok());
    }

    #[test]
    fn usernames_cannot_look_like_emails() {
        let err = require_username("pilot@example.com").unwrap_err();
        assert_eq!(err.to_string(), "Username must not contain '@'");

        assert!(require_username("pilot_77").is_ok());
    }
}
