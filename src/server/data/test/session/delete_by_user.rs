use super::*;

/// Tests logging a user out everywhere.
///
/// Verifies that every session of the user is removed while other users keep theirs.
///
/// Expected: Ok(2) and the other user's session still valid
#[tokio::test]
async fn deletes_all_sessions_of_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_session(db, user.id).await?;
    factory::create_session(db, user.id).await?;
    let kept = factory::create_session(db, other.id).await?;

    let repo = SessionRepository::new(db);
    let deleted = repo.delete_by_user(user.id).await?;

    assert_eq!(deleted, 2);
    assert!(repo
        .find_valid_by_token(&kept.token, Utc::now())
        .await?
        .is_some());

    Ok(())
}
