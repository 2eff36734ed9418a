use super::*;

/// Tests recording an approval.
///
/// Expected: Ok(true) with status approved, notes and reviewed_at stored
#[tokio::test]
async fn records_approval() -> Result<(), AppError> {
    let test = TestBuilder::new().with_livery_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let created = factory::create_livery(db, user.id).await?;

    let repo = LiveryRepository::new(db);
    let verdict = ReviewVerdict {
        approved: true,
        notes: "Looks good".to_string(),
    };
    let reviewed_at = Utc::now();
    assert!(repo.set_review(created.id, &verdict, reviewed_at).await?);

    let livery = repo.get_by_id(created.id).await?.unwrap();
    assert_eq!(livery.status, LiveryStatus::Approved);
    assert_eq!(livery.review_notes.as_deref(), Some("Looks good"));
    assert!(livery.reviewed_at.is_some());

    Ok(())
}

/// Tests recording a rejection.
///
/// Expected: Ok(true) with status rejected
#[tokio::test]
async fn records_rejection() -> Result<(), AppError> {
    let test = TestBuilder::new().with_livery_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let created = factory::create_livery(db, user.id).await?;

    let repo = LiveryRepository::new(db);
    let verdict = ReviewVerdict {
        approved: false,
        notes: "Wrong aircraft".to_string(),
    };
    repo.set_review(created.id, &verdict, Utc::now()).await?;

    let livery = repo.get_by_id(created.id).await?.unwrap();
    assert_eq!(livery.status, LiveryStatus::Rejected);

    Ok(())
}

/// Tests that the conditional verdict leaves reviewed liveries untouched.
///
/// Expected: Ok(false) and the earlier approval kept
#[tokio::test]
async fn conditional_review_skips_reviewed_livery() -> Result<(), AppError> {
    let test = TestBuilder::new().with_livery_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let created = factory::livery::create_approved_livery(db, user.id).await?;

    let repo = LiveryRepository::new(db);
    let verdict = ReviewVerdict {
        approved: false,
        notes: "Too late".to_string(),
    };
    assert!(!repo.set_review_if_pending(created.id, &verdict, Utc::now()).await?);

    let livery = repo.get_by_id(created.id).await?.unwrap();
    assert_eq!(livery.status, LiveryStatus::Approved);
    assert_ne!(livery.review_notes.as_deref(), Some("Too late"));

    Ok(())
}

/// Tests the conditional verdict on a pending livery.
///
/// Expected: Ok(true) with status rejected
#[tokio::test]
async fn conditional_review_updates_pending_livery() -> Result<(), AppError> {
    let test = TestBuilder::new().with_livery_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let created = factory::create_livery(db, user.id).await?;

    let repo = LiveryRepository::new(db);
    let verdict = ReviewVerdict {
        approved: false,
        notes: "Wrong aircraft".to_string(),
    };
    assert!(repo.set_review_if_pending(created.id, &verdict, Utc::now()).await?);

    let livery = repo.get_by_id(created.id).await?.unwrap();
    assert_eq!(livery.status, LiveryStatus::Rejected);

    Ok(())
}
