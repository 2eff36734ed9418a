use super::*;

/// Tests marking an email as verified.
///
/// Expected: Ok and the user reads back as verified
#[tokio::test]
async fn marks_email_verified() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    repo.set_email_verified(user.id).await?;

    let updated = repo.find_by_id(user.id).await?.unwrap();
    assert!(updated.email_verified);

    Ok(())
}
