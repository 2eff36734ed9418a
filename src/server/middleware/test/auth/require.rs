use super::*;

mod require_admin;

/// Tests a logged-in user with no permission requirements.
///
/// Verifies that the session token stored in the cookie session resolves to the user.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_with_session_token() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (user, login) = factory::helpers::create_user_with_session(db).await?;
    AuthSession::new(session)
        .set_session_token(&login.token)
        .await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, user.id);

    Ok(())
}

/// Tests a request without any login.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn denies_anonymous_request() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests a cookie pointing at an expired session row.
///
/// Expected: Err(AuthError::SessionExpired)
#[tokio::test]
async fn denies_expired_session() -> Result<(), AppError> {
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

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::SessionExpired))
    ));

    Ok(())
}

/// Tests a cookie whose session row was deleted by a logout elsewhere.
///
/// Expected: Err(AuthError::SessionExpired)
#[tokio::test]
async fn denies_revoked_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session)
        .set_session_token("never-issued")
        .await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::SessionExpired))
    ));

    Ok(())
}
