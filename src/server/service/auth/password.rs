//! Argon2 password hashing on the blocking thread pool.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::server::error::AppError;

/// Hashes a password into a PHC string with a fresh random salt.
///
/// # Returns
/// - `Ok(String)` - PHC encoded hash (`$argon2id$...`)
/// - `Err(AppError::InternalError)` - Hashing failed or the blocking task panicked
pub async fn hash_password(password: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))
    })
    .await
    .map_err(|e| AppError::InternalError(format!("Password hashing task failed: {}", e)))?
}

/// Checks a password against a stored PHC hash.
///
/// A malformed stored hash is treated as a mismatch.
pub async fn verify_password(password: String, password_hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || {
        let Ok(parsed) = PasswordHash::new(&password_hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    })
    .await
    .map_err(|e| AppError::InternalError(format!("Password verification task failed: {}", e)))
}
