//! Type-safe session management wrappers.
//!
//! Wraps the tower-sessions `Session` so handlers never touch raw session keys. The
//! cookie session only holds the opaque login session token; the `session` table row it
//! points at is the source of truth for whether the login is still valid.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_TOKEN: &str = "auth:session_token";

/// Authentication session management.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Gets the underlying Session reference, e.g. for `AuthGuard`.
    pub fn inner(&self) -> &Session {
        self.session
    }

    /// Stores the login session token after a successful login.
    ///
    /// The session ID is cycled first so a pre-login cookie cannot be reused.
    ///
    /// # Returns
    /// - `Ok(())` - Token stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_session_token(&self, token: &str) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session
            .insert(SESSION_AUTH_TOKEN, token.to_string())
            .await?;
        Ok(())
    }

    /// Retrieves the login session token, if any.
    pub async fn get_session_token(&self) -> Result<Option<String>, AppError> {
        Ok(self.session.get::<String>(SESSION_AUTH_TOKEN).await?)
    }

    /// Clears all session data, logging the browser out.
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}
