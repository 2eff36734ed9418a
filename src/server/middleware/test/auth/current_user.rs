use super::*;

/// Tests the optional lookup for an anonymous visitor.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_anonymous_visitor() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = AuthGuard::new(db, session).current_user().await?;

    assert!(user.is_none());

    Ok(())
}

/// Tests the optional lookup for a stale login.
///
/// A stale cookie is treated like no login at all rather than an error.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_expired_login() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    let login = factory::session::SessionFactory::new(db, user.id)
        .expired()
        .build()
        .await?;
    AuthSession::new(session)
        .set_session_token(&login.token)
        .await?;

    let current = AuthGuard::new(db, session).current_user().await?;

    assert!(current.is_none());

    Ok(())
}

/// Tests the optional lookup for a logged-in user.
///
/// Expected: Ok(Some(User))
#[tokio::test]
async fn returns_logged_in_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (user, login) = factory::helpers::create_user_with_session(db).await?;
    AuthSession::new(session)
        .set_session_token(&login.token)
        .await?;

    let current = AuthGuard::new(db, session).current_user().await?;

    assert_eq!(current.map(|u| u.id), Some(user.id));

    Ok(())
}
