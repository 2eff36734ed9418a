use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};
use tower_sessions::session_store::ExpiredDeletion;
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{error::AppError, service::maintenance::purge_expired};

/// Top of every hour.
const MAINTENANCE_SCHEDULE: &str = "0 0 * * * *";

/// Starts the hourly cleanup of expired logins, one-time tokens and cookie sessions.
pub async fn start_scheduler(
    db: DatabaseConnection,
    session_store: SqliteStore,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(MAINTENANCE_SCHEDULE, move |_uuid, _lock| {
        let db = db.clone();
        let session_store = session_store.clone();

        Box::pin(async move {
            if let Err(e) = purge_expired(&db).await {
                tracing::error!("Error purging expired logins: {}", e);
            }
            if let Err(e) = session_store.delete_expired().await {
                tracing::error!("Error purging expired cookie sessions: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Maintenance scheduler started");

    Ok(())
}
