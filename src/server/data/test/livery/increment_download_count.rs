use super::*;

/// Tests incrementing the download counter.
///
/// Expected: Ok(true) and the counter one higher per call
#[tokio::test]
async fn increments_counter() -> Result<(), AppError> {
    let test = TestBuilder::new().with_livery_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let created = factory::livery::LiveryFactory::new(db, user.id)
        .download_count(41)
        .approved()
        .build()
        .await?;

    let repo = LiveryRepository::new(db);
    assert!(repo.increment_download_count(created.id).await?);
    assert!(repo.increment_download_count(created.id).await?);

    let livery = repo.get_by_id(created.id).await?.unwrap();
    assert_eq!(livery.download_count, 43);

    Ok(())
}

/// Tests incrementing a missing livery.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_livery() -> Result<(), AppError> {
    let test = TestBuilder::new().with_livery_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let incremented = LiveryRepository::new(db)
        .increment_download_count(999)
        .await?;

    assert!(!incremented);

    Ok(())
}
