use super::*;

/// Tests finding a token for the purpose it was issued for.
///
/// Expected: Ok(Some(AuthToken))
#[tokio::test]
async fn finds_token_for_matching_purpose() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = AuthTokenRepository::new(db);
    repo.create(
        user.id,
        TokenPurpose::PasswordReset,
        "reset-me".to_string(),
        Utc::now() + Duration::hours(1),
    )
    .await?;

    let found = repo
        .find_valid("reset-me", TokenPurpose::PasswordReset, Utc::now())
        .await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.user_id, user.id);
    assert_eq!(found.purpose, TokenPurpose::PasswordReset);

    Ok(())
}

/// Tests that a verification token cannot be redeemed as a reset token.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_token_for_other_purpose() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let token = factory::create_auth_token(db, user.id).await?;

    let found = AuthTokenRepository::new(db)
        .find_valid(&token.token, TokenPurpose::PasswordReset, Utc::now())
        .await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that an expired token is not returned.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_expired_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let token = factory::auth_token::AuthTokenFactory::new(db, user.id)
        .expires_at(Utc::now() - Duration::minutes(1))
        .build()
        .await?;

    let found = AuthTokenRepository::new(db)
        .find_valid(&token.token, TokenPurpose::EmailVerification, Utc::now())
        .await?;

    assert!(found.is_none());

    Ok(())
}
