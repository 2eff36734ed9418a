use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::session::Session;

/// Repository for login session rows.
pub struct SessionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SessionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        token: String,
        expires_at: DateTime<Utc>,
    ) -> Result<Session, DbErr> {
        let entity = entity::session::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            token: ActiveValue::Set(token),
            expires_at: ActiveValue::Set(expires_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Session::from_entity(entity))
    }

    /// Finds the session with the given token if it has not expired at `now`.
    ///
    /// # Returns
    /// - `Ok(Some(Session))` - Token exists and is still valid
    /// - `Ok(None)` - Unknown or expired token
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_valid_by_token(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Session>, DbErr> {
        let entity = entity::prelude::Session::find()
            .filter(entity::session::Column::Token.eq(token))
            .filter(entity::session::Column::ExpiresAt.gt(now))
            .one(self.db)
            .await?;

        Ok(entity.map(Session::from_entity))
    }

    /// Deletes every session of a user, logging them out everywhere.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of sessions removed
    pub async fn delete_by_user(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Session::delete_many()
            .filter(entity::session::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::Session::delete_many()
            .filter(entity::session::Column::ExpiresAt.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
