use super::*;

/// Tests listing contact messages newest first.
///
/// Expected: Ok with the most recent message first
#[tokio::test]
async fn lists_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Contact).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let older = factory::contact::ContactFactory::new(db)
        .created_at(Utc::now() - Duration::days(1))
        .build()
        .await?;
    let newer = factory::contact::ContactFactory::new(db)
        .contact_type("feature_request")
        .build()
        .await?;

    let contacts = ContactRepository::new(db).list(None).await?;

    let ids: Vec<i32> = contacts.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
    assert_eq!(contacts[0].contact_type, ContactType::FeatureRequest);

    Ok(())
}

/// Tests the optional limit.
///
/// Expected: Ok with at most `limit` messages
#[tokio::test]
async fn respects_limit() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(Contact).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::create_contact(db).await?;
    }

    let contacts = ContactRepository::new(db).list(Some(2)).await?;

    assert_eq!(contacts.len(), 2);

    Ok(())
}
