use super::*;

/// Tests listing pending liveries oldest first.
///
/// Expected: Ok with pending liveries only, ordered by creation time
#[tokio::test]
async fn lists_pending_oldest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_livery_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let newer = factory::livery::LiveryFactory::new(db, user.id)
        .created_at(Utc::now() - Duration::minutes(5))
        .build()
        .await?;
    let older = factory::livery::LiveryFactory::new(db, user.id)
        .created_at(Utc::now() - Duration::hours(2))
        .build()
        .await?;
    factory::livery::create_approved_livery(db, user.id).await?;

    let pending = LiveryRepository::new(db).get_pending(None).await?;

    let ids: Vec<i32> = pending.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![older.id, newer.id]);

    Ok(())
}

/// Tests the creation cutoff used by the review poller.
///
/// Expected: Ok with only liveries created before the cutoff
#[tokio::test]
async fn skips_liveries_created_after_cutoff() -> Result<(), AppError> {
    let test = TestBuilder::new().with_livery_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let old_enough = factory::livery::LiveryFactory::new(db, user.id)
        .created_at(Utc::now() - Duration::minutes(10))
        .build()
        .await?;
    factory::create_livery(db, user.id).await?;

    let cutoff = Utc::now() - Duration::minutes(5);
    let pending = LiveryRepository::new(db).get_pending(Some(cutoff)).await?;

    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, old_enough.id);

    Ok(())
}
