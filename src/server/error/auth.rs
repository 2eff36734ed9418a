use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Neither a session cookie nor a bearer token identifies a login.
    #[error("No session token found in cookie session or Authorization header")]
    UserNotInSession,

    /// The session row points at a user that no longer exists.
    #[error("User {0} referenced by session does not exist")]
    UserNotInDatabase(i32),

    /// The session token is unknown or has expired.
    #[error("Session token is unknown or expired")]
    SessionExpired,

    /// The bearer token failed signature or expiry validation.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(String),

    /// Username/email and password did not match a user.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// The user lacks a permission the endpoint requires.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - Missing or stale credentials → 401 Unauthorized with "Authentication required"
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid username or password"
/// - `AccessDenied` → 403 Forbidden with "Insufficient permissions"
///
/// The detailed reason is logged at debug level only.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession
            | Self::UserNotInDatabase(_)
            | Self::SessionExpired
            | Self::InvalidToken(_) => (StatusCode::UNAUTHORIZED, "Authentication required"),
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid username or password"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Insufficient permissions"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
