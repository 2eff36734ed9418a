//! Username/password authentication.
//!
//! Registration, login and logout, plus the one-time token flows for email
//! verification and password resets in [`recovery`].

use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserRole,
    server::{
        data::{auth_token::AuthTokenRepository, session::SessionRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        model::{
            auth_token::TokenPurpose,
            session::Session,
            user::{CreateUserParams, User},
        },
        util::validate::{require_email, require_len, require_username},
    },
};

pub mod password;
pub mod recovery;
pub mod token;

use password::{hash_password, verify_password};
use token::{generate_random_token, session_lifetime, TokenService};

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_PASSWORD_LEN: usize = 128;

/// Result of a successful login.
pub struct LoginOutcome {
    pub user: User,
    pub session: Session,
    /// Signed JWT carrying the session token.
    pub jwt: String,
}

pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub tokens: &'a TokenService,
    /// Address that is granted the admin role once it is verified.
    pub admin_email: Option<&'a str>,
}

pub(crate) fn validate_password(password: &str) -> Result<(), AppError> {
    require_len("Password", password, MIN_PASSWORD_LEN, MAX_PASSWORD_LEN)
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a TokenService,
        admin_email: Option<&'a str>,
    ) -> Self {
        Self {
            db,
            tokens,
            admin_email,
        }
    }

    /// Registers a new account.
    ///
    /// Validates the input, rejects taken usernames and emails, hashes the password and
    /// issues an email verification token. New accounts always start with the user role.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Invalid input or duplicate username/email
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: String,
    ) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let username = username.trim();
        let email = email.trim().to_lowercase();

        require_username(username)?;
        require_email(&email)?;
        validate_password(&password)?;

        if user_repo.find_by_username(username).await?.is_some() {
            return Err(AppError::BadRequest("Username is already taken".to_string()));
        }
        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::BadRequest(
                "Email is already registered".to_string(),
            ));
        }

        let user = user_repo
            .create(CreateUserParams {
                username: username.to_string(),
                email,
                password_hash: hash_password(password).await?,
                role: UserRole::User,
            })
            .await?;

        let token = self
            .issue_token(user.id, TokenPurpose::EmailVerification)
            .await?;
        tracing::info!(
            "Registered user {} ({}); email verification token: {}",
            user.id,
            user.username,
            token
        );

        Ok(user)
    }

    /// Checks credentials and opens a new session.
    ///
    /// # Returns
    /// - `Ok(LoginOutcome)` - User, new session row and a JWT bound to it
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown user or wrong password
    pub async fn login(
        &self,
        username_or_email: &str,
        password: String,
    ) -> Result<LoginOutcome, AppError> {
        let user_repo = UserRepository::new(self.db);
        let session_repo = SessionRepository::new(self.db);

        let Some(user) = user_repo
            .find_by_username_or_email(username_or_email.trim())
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, user.password_hash.clone()).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let now = Utc::now();
        let session = session_repo
            .create(user.id, generate_random_token(), now + session_lifetime())
            .await?;
        user_repo.update_last_signed_in(user.id).await?;

        let jwt = self.tokens.issue(&user, &session.token, now)?;

        Ok(LoginOutcome { user, session, jwt })
    }

    /// Ends every session of the user.
    pub async fn logout(&self, user_id: i32) -> Result<(), AppError> {
        let removed = SessionRepository::new(self.db)
            .delete_by_user(user_id)
            .await?;

        tracing::debug!("Removed {} session(s) of user {}", removed, user_id);

        Ok(())
    }

    /// Replaces any outstanding token of the same purpose with a fresh one.
    async fn issue_token(&self, user_id: i32, purpose: TokenPurpose) -> Result<String, AppError> {
        let token_repo = AuthTokenRepository::new(self.db);

        token_repo
            .delete_by_user_and_purpose(user_id, purpose)
            .await?;

        let token = generate_random_token();
        token_repo
            .create(
                user_id,
                purpose,
                token.clone(),
                Utc::now() + purpose.lifetime(),
            )
            .await?;

        Ok(token)
    }
}
