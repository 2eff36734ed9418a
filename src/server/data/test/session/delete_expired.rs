use super::*;

/// Tests purging expired sessions.
///
/// Expected: Ok(1) with only the expired row removed
#[tokio::test]
async fn deletes_only_expired_sessions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::session::SessionFactory::new(db, user.id)
        .expired()
        .build()
        .await?;
    let valid = factory::create_session(db, user.id).await?;

    let repo = SessionRepository::new(db);
    let deleted = repo.delete_expired(Utc::now()).await?;

    assert_eq!(deleted, 1);
    assert!(repo
        .find_valid_by_token(&valid.token, Utc::now())
        .await?
        .is_some());

    Ok(())
}
