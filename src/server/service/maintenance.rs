use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{auth_token::AuthTokenRepository, session::SessionRepository},
    error::AppError,
};

/// Deletes expired login sessions and one-time tokens.
///
/// # Returns
/// - `Ok((sessions, tokens))` - Number of rows removed from each table
pub async fn purge_expired(db: &DatabaseConnection) -> Result<(u64, u64), AppError> {
    let now = Utc::now();

    let sessions = SessionRepository::new(db).delete_expired(now).await?;
    let tokens = AuthTokenRepository::new(db).delete_expired(now).await?;

    if sessions > 0 || tokens > 0 {
        tracing::info!(
            "Purged {} expired session(s) and {} expired token(s)",
            sessions,
            tokens
        );
    }

    Ok((sessions, tokens))
}
