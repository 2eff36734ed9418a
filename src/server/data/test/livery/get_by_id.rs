use super::*;

/// Tests fetching a livery with its uploader.
///
/// Expected: Ok(Some(Livery)) carrying the uploader's username
#[tokio::test]
async fn gets_livery_with_uploader() -> Result<(), AppError> {
    let test = TestBuilder::new().with_livery_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("painter")
        .build()
        .await?;
    let created = factory::create_livery(db, user.id).await?;

    let livery = LiveryRepository::new(db).get_by_id(created.id).await?;

    assert!(livery.is_some());
    let livery = livery.unwrap();
    assert_eq!(livery.id, created.id);
    let uploader = livery.uploader.unwrap();
    assert_eq!(uploader.id, user.id);
    assert_eq!(uploader.username, "painter");

    Ok(())
}

/// Tests fetching a pending livery.
///
/// The repository does not filter by status; visibility is decided by the service.
///
/// Expected: Ok(Some(Livery)) with status pending
#[tokio::test]
async fn returns_liveries_in_any_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_livery_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let created = factory::create_livery(db, user.id).await?;

    let livery = LiveryRepository::new(db).get_by_id(created.id).await?;

    assert_eq!(livery.map(|l| l.status), Some(LiveryStatus::Pending));

    Ok(())
}

/// Tests fetching a livery that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_livery() -> Result<(), AppError> {
    let test = TestBuilder::new().with_livery_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let livery = LiveryRepository::new(db).get_by_id(999).await?;

    assert!(livery.is_none());

    Ok(())
}
