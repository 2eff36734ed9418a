use super::*;

/// Tests finding a session that has not expired.
///
/// Expected: Ok(Some(Session)) for the stored token
#[tokio::test]
async fn finds_unexpired_session() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = SessionRepository::new(db);
    let created = repo
        .create(user.id, "abc".to_string(), Utc::now() + Duration::days(7))
        .await?;

    let found = repo.find_valid_by_token("abc", Utc::now()).await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.user_id, user.id);

    Ok(())
}

/// Tests that an expired session is not returned.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_expired_session() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::session::SessionFactory::new(db, user.id)
        .token("stale")
        .expired()
        .build()
        .await?;

    let found = SessionRepository::new(db)
        .find_valid_by_token("stale", Utc::now())
        .await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests lookup of a token that was never issued.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let found = SessionRepository::new(db)
        .find_valid_by_token("missing", Utc::now())
        .await?;

    assert!(found.is_none());

    Ok(())
}
