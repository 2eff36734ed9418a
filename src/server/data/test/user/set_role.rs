use super::*;

/// Tests promoting a user to admin.
///
/// Expected: Ok and the user reads back as admin
#[tokio::test]
async fn promotes_user_to_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    repo.set_role(user.id, UserRole::Admin).await?;

    let updated = repo.find_by_id(user.id).await?.unwrap();
    assert!(updated.is_admin());

    Ok(())
}
