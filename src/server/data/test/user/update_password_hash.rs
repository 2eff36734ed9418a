use super::*;

/// Tests replacing a password hash.
///
/// Verifies that only the targeted user's hash changes.
///
/// Expected: Ok with the new hash stored for the target user only
#[tokio::test]
async fn updates_only_target_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    repo.update_password_hash(target.id, "new-hash".to_string())
        .await?;

    let target = repo.find_by_id(target.id).await?.unwrap();
    let other_after = repo.find_by_id(other.id).await?.unwrap();
    assert_eq!(target.password_hash, "new-hash");
    assert_eq!(other_after.password_hash, other.password_hash);

    Ok(())
}
