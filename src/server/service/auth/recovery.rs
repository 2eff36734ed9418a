use chrono::Utc;
use dioxus_logger::tracing;

use crate::{
    model::user::UserRole,
    server::{
        data::{auth_token::AuthTokenRepository, session::SessionRepository, user::UserRepository},
        error::AppError,
        model::auth_token::{AuthToken, TokenPurpose},
        service::auth::{password::hash_password, validate_password, AuthService},
    },
};

impl<'a> AuthService<'a> {
    /// Marks the owner of a valid verification token as verified and consumes the token.
    ///
    /// The configured admin email is promoted to admin here, once ownership of the
    /// address is proven.
    pub async fn verify_email(&self, token: &str) -> Result<(), AppError> {
        let auth_token = self
            .redeem(token, TokenPurpose::EmailVerification)
            .await?;

        let user_repo = UserRepository::new(self.db);
        user_repo.set_email_verified(auth_token.user_id).await?;

        let Some(admin_email) = self.admin_email else {
            return Ok(());
        };
        if let Some(user) = user_repo.find_by_id(auth_token.user_id).await? {
            if !user.is_admin() && user.email == admin_email.to_lowercase() {
                user_repo.set_role(user.id, UserRole::Admin).await?;
                tracing::info!("Granted admin role to verified user {}", user.id);
            }
        }

        Ok(())
    }

    /// Issues a password reset token when an account with that email exists.
    ///
    /// Succeeds either way so callers cannot probe for registered addresses.
    pub async fn request_password_reset(&self, email: &str) -> Result<(), AppError> {
        let Some(user) = UserRepository::new(self.db)
            .find_by_email(email.trim())
            .await?
        else {
            tracing::debug!("Password reset requested for unknown email");
            return Ok(());
        };

        let token = self
            .issue_token(user.id, TokenPurpose::PasswordReset)
            .await?;
        tracing::info!("Password reset token for user {}: {}", user.id, token);

        Ok(())
    }

    /// Sets a new password and signs the user out everywhere.
    pub async fn reset_password(&self, token: &str, new_password: String) -> Result<(), AppError> {
        validate_password(&new_password)?;

        let auth_token = self.redeem(token, TokenPurpose::PasswordReset).await?;

        UserRepository::new(self.db)
            .update_password_hash(auth_token.user_id, hash_password(new_password).await?)
            .await?;
        SessionRepository::new(self.db)
            .delete_by_user(auth_token.user_id)
            .await?;

        Ok(())
    }

    async fn redeem(&self, token: &str, purpose: TokenPurpose) -> Result<AuthToken, AppError> {
        let token_repo = AuthTokenRepository::new(self.db);

        let auth_token = token_repo
            .find_valid(token.trim(), purpose, Utc::now())
            .await?
            .ok_or_else(|| AppError::BadRequest("Invalid or expired token".to_string()))?;

        token_repo
            .delete_by_user_and_purpose(auth_token.user_id, purpose)
            .await?;

        Ok(auth_token)
    }
}
