use super::*;

/// Tests a partial update.
///
/// Verifies that supplied fields change, a cleared description becomes null and untouched
/// fields keep their values.
///
/// Expected: Ok with the updated livery
#[tokio::test]
async fn applies_partial_update() -> Result<(), AppError> {
    let test = TestBuilder::new().with_livery_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let created = factory::livery::LiveryFactory::new(db, user.id)
        .description("Old description")
        .approved()
        .build()
        .await?;

    let updated = LiveryRepository::new(db)
        .update(
            created.id,
            UpdateLiveryParams {
                livery_name: Some("Renamed".to_string()),
                description: Some(None),
                msfs_version: Some(MsfsVersion::Both),
                install_method: None,
                screenshots: Some(vec!["http://localhost/s.png".to_string()]),
            },
        )
        .await?;

    assert_eq!(updated.livery_name, "Renamed");
    assert!(updated.description.is_none());
    assert_eq!(updated.msfs_version, Some(MsfsVersion::Both));
    assert_eq!(updated.screenshots, vec!["http://localhost/s.png".to_string()]);
    assert_eq!(updated.aircraft, created.aircraft);
    assert_eq!(updated.status, LiveryStatus::Approved);

    Ok(())
}

/// Tests updating a livery that does not exist.
///
/// Expected: Err(AppError::DbErr(RecordNotFound))
#[tokio::test]
async fn fails_for_missing_livery() -> Result<(), AppError> {
    let test = TestBuilder::new().with_livery_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = LiveryRepository::new(db)
        .update(999, UpdateLiveryParams::default())
        .await;

    assert!(matches!(
        result,
        Err(AppError::DbErr(sea_orm::DbErr::RecordNotFound(_)))
    ));

    Ok(())
}
