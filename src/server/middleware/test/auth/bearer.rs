use super::*;

/// Tests authenticating with a bearer JWT instead of the cookie.
///
/// Expected: Ok(User) for the token's subject
#[tokio::test]
async fn accepts_valid_bearer_token() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (user, login) = factory::helpers::create_user_with_session(db).await?;
    let tokens = TokenService::new(SECRET);
    let jwt = tokens.issue(&domain_user(user.clone()), &login.token, Utc::now())?;
    let bearer = BearerToken(Some(jwt));

    let result = AuthGuard::new(db, session)
        .with_bearer(&tokens, &bearer)
        .require(&[])
        .await;

    assert_eq!(result?.id, user.id);

    Ok(())
}

/// Tests a JWT signed with a different secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_token_with_wrong_signature() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (user, login) = factory::helpers::create_user_with_session(db).await?;
    let jwt = TokenService::new("another-secret").issue(
        &domain_user(user),
        &login.token,
        Utc::now(),
    )?;
    let bearer = BearerToken(Some(jwt));
    let tokens = TokenService::new(SECRET);

    let result = AuthGuard::new(db, session)
        .with_bearer(&tokens, &bearer)
        .require(&[])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a JWT that is still signed correctly but whose session was logged out.
///
/// Expected: Err(AuthError::SessionExpired)
#[tokio::test]
async fn rejects_token_for_revoked_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    let tokens = TokenService::new(SECRET);
    let jwt = tokens.issue(&domain_user(user), "logged-out-session", Utc::now())?;
    let bearer = BearerToken(Some(jwt));

    let result = AuthGuard::new(db, session)
        .with_bearer(&tokens, &bearer)
        .require(&[])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::SessionExpired))
    ));

    Ok(())
}

/// Tests a JWT whose subject does not own the referenced session.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_token_for_someone_elses_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let attacker = factory::create_user(db).await?;
    let (_victim, victim_login) = factory::helpers::create_user_with_session(db).await?;
    let tokens = TokenService::new(SECRET);
    let jwt = tokens.issue(&domain_user(attacker), &victim_login.token, Utc::now())?;
    let bearer = BearerToken(Some(jwt));

    let result = AuthGuard::new(db, session)
        .with_bearer(&tokens, &bearer)
        .require(&[])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a JWT past its expiry.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_expired_token() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (user, login) = factory::helpers::create_user_with_session(db).await?;
    let tokens = TokenService::new(SECRET);
    let jwt = tokens.issue(
        &domain_user(user),
        &login.token,
        Utc::now() - Duration::days(30),
    )?;
    let bearer = BearerToken(Some(jwt));

    let result = AuthGuard::new(db, session)
        .with_bearer(&tokens, &bearer)
        .require(&[])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}
