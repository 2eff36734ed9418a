use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

use crate::server::{
    error::AppError,
    model::auth_token::{AuthToken, TokenPurpose},
};

/// Repository for one-time email verification and password reset tokens.
pub struct AuthTokenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthTokenRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        purpose: TokenPurpose,
        token: String,
        expires_at: DateTime<Utc>,
    ) -> Result<AuthToken, AppError> {
        let entity = entity::auth_token::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            purpose: ActiveValue::Set(purpose.as_str().to_string()),
            token: ActiveValue::Set(token),
            expires_at: ActiveValue::Set(expires_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        AuthToken::from_entity(entity)
    }

    /// Finds an unexpired token issued for `purpose`.
    pub async fn find_valid(
        &self,
        token: &str,
        purpose: TokenPurpose,
        now: DateTime<Utc>,
    ) -> Result<Option<AuthToken>, AppError> {
        let entity = entity::prelude::AuthToken::find()
            .filter(entity::auth_token::Column::Token.eq(token))
            .filter(entity::auth_token::Column::Purpose.eq(purpose.as_str()))
            .filter(entity::auth_token::Column::ExpiresAt.gt(now))
            .one(self.db)
            .await?;

        entity.map(AuthToken::from_entity).transpose()
    }

    /// Removes all of a user's tokens for one purpose, consuming any outstanding links.
    pub async fn delete_by_user_and_purpose(
        &self,
        user_id: i32,
        purpose: TokenPurpose,
    ) -> Result<u64, AppError> {
        let result = entity::prelude::AuthToken::delete_many()
            .filter(entity::auth_token::Column::UserId.eq(user_id))
            .filter(entity::auth_token::Column::Purpose.eq(purpose.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        let result = entity::prelude::AuthToken::delete_many()
            .filter(entity::auth_token::Column::ExpiresAt.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
