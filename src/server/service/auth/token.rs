//! Session tokens and signed JWTs.
//!
//! Opaque random tokens identify `session` and `auth_token` rows. The JWT handed out at
//! login wraps the session token in its `sid` claim, so revoking the session row also
//! revokes the JWT.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::User,
};

/// Lifetime of a login session and of the JWT issued with it.
pub const SESSION_LIFETIME_DAYS: i64 = 7;

pub fn session_lifetime() -> Duration {
    Duration::days(SESSION_LIFETIME_DAYS)
}

/// Generates 32 random bytes encoded as 64 lowercase hex characters.
pub fn generate_random_token() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID.
    pub sub: String,
    pub username: String,
    pub email: String,
    /// Session token the JWT is bound to.
    pub sid: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn user_id(&self) -> Result<i32, AuthError> {
        self.sub.parse().map_err(|_| {
            AuthError::InvalidToken(format!("subject '{}' is not a user id", self.sub))
        })
    }
}

/// Signs and verifies HS256 JWTs with the configured secret.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issues a JWT for `user` bound to the session identified by `session_token`.
    pub fn issue(
        &self,
        user: &User,
        session_token: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<String, AppError> {
        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
            sid: session_token.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + session_lifetime()).timestamp(),
        };

        let token =
            jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;

        Ok(token)
    }

    /// Verifies signature and expiry and returns the claims.
    pub fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        let data = jsonwebtoken::decode::<Claims>(
            token,
            &self.decoding_key,
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        Ok(data.claims)
    }
}
