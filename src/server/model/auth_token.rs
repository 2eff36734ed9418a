//! One-time tokens for email verification and password resets.

use chrono::{DateTime, Duration, Utc};
use std::{fmt, str::FromStr};

use crate::server::{error::AppError, util::parse::parse_stored};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenPurpose {
    EmailVerification,
    PasswordReset,
}

impl TokenPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmailVerification => "email_verification",
            Self::PasswordReset => "password_reset",
        }
    }

    /// How long a freshly issued token stays redeemable.
    pub fn lifetime(&self) -> Duration {
        match self {
            Self::EmailVerification => Duration::hours(24),
            Self::PasswordReset => Duration::hours(1),
        }
    }
}

impl fmt::Display for TokenPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenPurpose {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "email_verification" => Ok(Self::EmailVerification),
            "password_reset" => Ok(Self::PasswordReset),
            other => Err(format!("unknown token purpose '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthToken {
    pub id: i32,
    pub user_id: i32,
    pub purpose: TokenPurpose,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl AuthToken {
    pub fn from_entity(entity: entity::auth_token::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            purpose: parse_stored("auth_token.purpose", &entity.purpose)?,
            token: entity.token,
            expires_at: entity.expires_at,
        })
    }
}
