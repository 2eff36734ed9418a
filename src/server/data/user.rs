//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing registered accounts. Lookups
//! by email are case-insensitive because addresses are stored lowercased.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    EntityTrait, QueryFilter,
};

use crate::{
    model::user::UserRole,
    server::{
        error::AppError,
        model::user::{CreateUserParams, User},
    },
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `params` - Username, lowercased email, password hash and role
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::DbErr)` - Insert failed, including unique constraint violations
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let now = Utc::now();

        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            role: ActiveValue::Set(params.role.as_str().to_string()),
            email_verified: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            last_signed_in: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        entity.map(User::from_entity).transpose()
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email.to_lowercase()))
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Finds the user whose username or email equals `identifier`.
    ///
    /// Used at login where a single field accepts either value. Identifiers containing `@`
    /// are matched against emails only.
    pub async fn find_by_username_or_email(
        &self,
        identifier: &str,
    ) -> Result<Option<User>, AppError> {
        let condition = if identifier.contains('@') {
            Condition::all().add(entity::user::Column::Email.eq(identifier.to_lowercase()))
        } else {
            Condition::all().add(entity::user::Column::Username.eq(identifier))
        };

        let entity = entity::prelude::User::find()
            .filter(condition)
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Sets `last_signed_in` to the current time.
    pub async fn update_last_signed_in(&self, id: i32) -> Result<(), AppError> {
        let now = Utc::now();

        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(entity::user::Column::LastSignedIn, Expr::value(now))
            .col_expr(entity::user::Column::UpdatedAt, Expr::value(now))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn set_email_verified(&self, id: i32) -> Result<(), AppError> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(entity::user::Column::EmailVerified, Expr::value(true))
            .col_expr(entity::user::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn set_role(&self, id: i32, role: UserRole) -> Result<(), AppError> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(entity::user::Column::Role, Expr::value(role.as_str()))
            .col_expr(entity::user::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn update_password_hash(
        &self,
        id: i32,
        password_hash: String,
    ) -> Result<(), AppError> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(entity::user::Column::PasswordHash, Expr::value(password_hash))
            .col_expr(entity::user::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
