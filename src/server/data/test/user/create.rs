use super::*;

/// Tests creating a user.
///
/// Verifies that the repository stores the username, email, hash and role, and that new
/// accounts start with an unverified email.
///
/// Expected: Ok with the stored user
#[tokio::test]
async fn creates_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            username: "pilot".to_string(),
            email: "pilot@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: UserRole::User,
        })
        .await?;

    assert_eq!(user.username, "pilot");
    assert_eq!(user.email, "pilot@example.com");
    assert_eq!(user.password_hash, "hash");
    assert_eq!(user.role, UserRole::User);
    assert!(!user.email_verified);
    assert!(!user.is_admin());

    Ok(())
}

/// Tests creating an admin user.
///
/// Expected: Ok with role admin
#[tokio::test]
async fn creates_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db)
        .create(CreateUserParams {
            username: "owner".to_string(),
            email: "owner@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: UserRole::Admin,
        })
        .await?;

    assert!(user.is_admin());

    Ok(())
}

/// Tests the unique constraint on usernames.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("pilot")
        .build()
        .await?;

    let result = UserRepository::new(db)
        .create(CreateUserParams {
            username: "pilot".to_string(),
            email: "other@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: UserRole::User,
        })
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
