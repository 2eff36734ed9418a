use super::*;

/// Tests lookup by username.
///
/// Expected: Ok(Some(User))
#[tokio::test]
async fn finds_user_by_username() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .username("pilot")
        .build()
        .await?;

    let found = UserRepository::new(db)
        .find_by_username_or_email("pilot")
        .await?;

    assert_eq!(found.map(|u| u.id), Some(created.id));

    Ok(())
}

/// Tests lookup by email ignores case.
///
/// Verifies that an email typed with uppercase letters still matches the stored lowercased
/// address.
///
/// Expected: Ok(Some(User))
#[tokio::test]
async fn finds_user_by_email_case_insensitively() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("pilot@example.com")
        .build()
        .await?;

    let found = UserRepository::new(db)
        .find_by_username_or_email("Pilot@Example.com")
        .await?;

    assert_eq!(found.map(|u| u.id), Some(created.id));

    Ok(())
}

/// Tests that an identifier containing `@` only matches emails.
///
/// Verifies that a username spelled like another account's email does not shadow that
/// account at login.
///
/// Expected: Ok(Some(User)) for the email owner
#[tokio::test]
async fn email_identifier_ignores_usernames() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("victim@example.com")
        .build()
        .await?;
    let owner = factory::user::UserFactory::new(db)
        .email("victim@example.com")
        .build()
        .await?;

    let found = UserRepository::new(db)
        .find_by_username_or_email("victim@example.com")
        .await?;

    assert_eq!(found.map(|u| u.id), Some(owner.id));

    Ok(())
}

/// Tests lookup with an unknown identifier.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_identifier() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let found = UserRepository::new(db)
        .find_by_username_or_email("nobody")
        .await?;

    assert!(found.is_none());

    Ok(())
}
