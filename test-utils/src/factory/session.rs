//! Session factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for session rows.
///
/// Defaults: token `session-token-{id}`, expiring 7 days from now.
pub struct SessionFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    token: String,
    expires_at: DateTime<Utc>,
}

impl<'a> SessionFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            token: format!("session-token-{}", next_id()),
            expires_at: Utc::now() + Duration::days(7),
        }
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = expires_at;
        self
    }

    /// Sets the expiry to one hour in the past.
    pub fn expired(self) -> Self {
        self.expires_at(Utc::now() - Duration::hours(1))
    }

    pub async fn build(self) -> Result<entity::session::Model, DbErr> {
        entity::session::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            token: ActiveValue::Set(self.token),
            expires_at: ActiveValue::Set(self.expires_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a valid session for `user_id`.
pub async fn create_session(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::session::Model, DbErr> {
    SessionFactory::new(db, user_id).build().await
}
