use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use chrono::Duration;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError,
    service::review::{process_pending_reviews, LiveryReviewer},
};

/// Starts the automated livery review scheduler
///
/// On every tick of `schedule` the pending liveries older than `min_age` are reviewed one
/// at a time. A tick that fires while the previous pass is still running is skipped.
///
/// # Arguments
/// - `db`: Database connection
/// - `reviewer`: Reviewer deciding on each livery
/// - `schedule`: Six-field cron expression (seconds first)
/// - `min_age`: Minimum time a livery stays pending before review
pub async fn start_scheduler<R>(
    db: DatabaseConnection,
    reviewer: R,
    schedule: &str,
    min_age: Duration,
) -> Result<(), AppError>
where
    R: LiveryReviewer + Clone + Send + Sync + 'static,
{
    let scheduler = JobScheduler::new().await?;
    let running = Arc::new(AtomicBool::new(false));

    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let db = db.clone();
        let reviewer = reviewer.clone();
        let running = running.clone();

        Box::pin(async move {
            if running.swap(true, Ordering::AcqRel) {
                tracing::debug!("Previous livery review pass still running, skipping tick");
                return;
            }

            match process_pending_reviews(&db, &reviewer, min_age).await {
                Ok(summary) if summary.approved + summary.rejected + summary.skipped > 0 => {
                    tracing::info!(
                        "Reviewed liveries: {} approved, {} rejected ({} failed, {} skipped)",
                        summary.approved,
                        summary.rejected,
                        summary.failed,
                        summary.skipped
                    );
                }
                Ok(_) => {}
                Err(e) => tracing::error!("Error processing livery reviews: {}", e),
            }

            running.store(false, Ordering::Release);
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Livery review scheduler started ({})", schedule);

    Ok(())
}
