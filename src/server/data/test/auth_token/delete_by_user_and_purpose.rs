use super::*;

/// Tests consuming a user's tokens for one purpose.
///
/// Verifies that tokens for the other purpose are left untouched.
///
/// Expected: Ok(1) and the verification token still redeemable
#[tokio::test]
async fn deletes_only_matching_purpose() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let verification = factory::create_auth_token(db, user.id).await?;
    factory::auth_token::AuthTokenFactory::new(db, user.id)
        .purpose("password_reset")
        .build()
        .await?;

    let repo = AuthTokenRepository::new(db);
    let deleted = repo
        .delete_by_user_and_purpose(user.id, TokenPurpose::PasswordReset)
        .await?;

    assert_eq!(deleted, 1);
    assert!(repo
        .find_valid(
            &verification.token,
            TokenPurpose::EmailVerification,
            Utc::now()
        )
        .await?
        .is_some());

    Ok(())
}
