use super::*;

/// Tests creating a livery.
///
/// Verifies that every new livery starts pending with no downloads and that the screenshot
/// list survives the JSON column.
///
/// Expected: Ok with status pending and download_count 0
#[tokio::test]
async fn creates_pending_livery() -> Result<(), AppError> {
    let test = TestBuilder::new().with_livery_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let livery = LiveryRepository::new(db)
        .create(create_params(user.id))
        .await?;

    assert_eq!(livery.user_id, user.id);
    assert_eq!(livery.status, LiveryStatus::Pending);
    assert_eq!(livery.download_count, 0);
    assert_eq!(livery.manufacturer, Manufacturer::Airbus);
    assert_eq!(livery.msfs_version, Some(MsfsVersion::Msfs2024));
    assert_eq!(livery.screenshots.len(), 1);
    assert!(livery.reviewed_at.is_none());

    Ok(())
}
