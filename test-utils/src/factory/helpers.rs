//! Shared helpers for factory modules.

use sea_orm::{DatabaseConnection, DbErr};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Returns a process-wide unique value for building unique test identifiers.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user together with a valid session for them.
///
/// Returns the user and the session token, ready to be stored in an `AuthSession` or embedded
/// in a bearer JWT.
pub async fn create_user_with_session(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::session::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let session = crate::factory::session::create_session(db, user.id).await?;

    Ok((user, session))
}
