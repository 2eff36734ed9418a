//! Request authentication and permission checks.
//!
//! A request is authenticated either by the login session token kept in the cookie
//! session or by an `Authorization: Bearer <jwt>` header. Both resolve to a row in the
//! `session` table, which must still be valid.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};
use chrono::Utc;
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{session::SessionRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
    service::auth::token::TokenService,
};

pub enum Permission {
    Admin,
}

/// Raw bearer token from the `Authorization` header, if present.
#[derive(Debug, Clone, Default)]
pub struct BearerToken(pub Option<String>);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty());

        Ok(Self(token))
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
    bearer: Option<(&'a TokenService, &'a str)>,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self {
            db,
            session,
            bearer: None,
        }
    }

    /// Also accepts a JWT from the `Authorization` header when no cookie login exists.
    pub fn with_bearer(mut self, tokens: &'a TokenService, bearer: &'a BearerToken) -> Self {
        self.bearer = bearer.0.as_deref().map(|token| (tokens, token));
        self
    }

    /// Requires an authenticated user holding every listed permission.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AppError::AuthErr(_))` - Missing, expired or insufficient credentials
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user = self.authenticate().await?;

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "User attempted to access an admin endpoint without the admin role"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    /// Returns the authenticated user, or `None` for anonymous and stale logins.
    ///
    /// Infrastructure errors are still returned.
    pub async fn current_user(&self) -> Result<Option<User>, AppError> {
        match self.authenticate().await {
            Ok(user) => Ok(Some(user)),
            Err(AppError::AuthErr(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn authenticate(&self) -> Result<User, AppError> {
        let session_repo = SessionRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);
        let now = Utc::now();

        let (token, claimed_user_id) =
            match AuthSession::new(self.session).get_session_token().await? {
                Some(token) => (token, None),
                None => {
                    let Some((tokens, jwt)) = self.bearer else {
                        return Err(AuthError::UserNotInSession.into());
                    };
                    let claims = tokens.decode(jwt)?;
                    (claims.sid.clone(), Some(claims.user_id()?))
                }
            };

        let Some(login) = session_repo.find_valid_by_token(&token, now).await? else {
            return Err(AuthError::SessionExpired.into());
        };

        if claimed_user_id.is_some_and(|user_id| user_id != login.user_id) {
            return Err(AuthError::InvalidToken(
                "token subject does not own the referenced session".to_string(),
            )
            .into());
        }

        let Some(user) = user_repo.find_by_id(login.user_id).await? else {
            return Err(AuthError::UserNotInDatabase(login.user_id).into());
        };

        Ok(user)
    }
}
