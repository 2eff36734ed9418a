//! Email verification and password reset token factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for auth token rows.
///
/// Defaults: purpose `email_verification`, token `auth-token-{id}`, expiring in one hour.
pub struct AuthTokenFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    purpose: String,
    token: String,
    expires_at: DateTime<Utc>,
}

impl<'a> AuthTokenFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            purpose: "email_verification".to_string(),
            token: format!("auth-token-{}", next_id()),
            expires_at: Utc::now() + Duration::hours(1),
        }
    }

    /// Stored purpose, `email_verification` or `password_reset`.
    pub fn purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = purpose.into();
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = expires_at;
        self
    }

    pub async fn build(self) -> Result<entity::auth_token::Model, DbErr> {
        entity::auth_token::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            purpose: ActiveValue::Set(self.purpose),
            token: ActiveValue::Set(self.token),
            expires_at: ActiveValue::Set(self.expires_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unexpired email verification token for `user_id`.
pub async fn create_auth_token(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::auth_token::Model, DbErr> {
    AuthTokenFactory::new(db, user_id).build().await
}
