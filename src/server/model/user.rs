//! User domain models and parameters.
//!
//! Provides the domain model for registered accounts along with the parameter
//! type used when creating a user during registration.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{UserDto, UserRole},
    server::{error::AppError, util::parse::parse_stored},
};

/// Registered account with credentials and role.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    /// Lowercased email address.
    pub email: String,
    /// Argon2 PHC string, never leaves the server.
    pub password_hash: String,
    pub role: UserRole,
    pub email_verified: bool,
    pub created_at: DateTime<Utc>,
    pub last_signed_in: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The password hash is dropped.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            role: self.role,
            email_verified: self.email_verified,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(InvalidStoredValue))` - Stored role is unknown
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            password_hash: entity.password_hash,
            role: parse_stored("user.role", &entity.role)?,
            email_verified: entity.email_verified,
            created_at: entity.created_at,
            last_signed_in: entity.last_signed_in,
        })
    }
}

/// Parameters for inserting a new user.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}
