use super::*;

/// Tests listing with no liveries.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_list_without_liveries() -> Result<(), AppError> {
    let test = TestBuilder::new().with_livery_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let liveries = LiveryRepository::new(db)
        .get_approved_filtered(&LiveryFilter::default())
        .await?;

    assert!(liveries.is_empty());

    Ok(())
}

/// Tests that only approved liveries are listed.
///
/// Expected: Ok with the single approved livery
#[tokio::test]
async fn lists_only_approved_liveries() -> Result<(), AppError> {
    let test = TestBuilder::new().with_livery_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_livery(db, user.id).await?;
    factory::livery::LiveryFactory::new(db, user.id)
        .rejected()
        .build()
        .await?;
    let approved = factory::livery::create_approved_livery(db, user.id).await?;

    let liveries = LiveryRepository::new(db)
        .get_approved_filtered(&LiveryFilter::default())
        .await?;

    assert_eq!(liveries.len(), 1);
    assert_eq!(liveries[0].id, approved.id);
    assert!(liveries[0].uploader.is_some());

    Ok(())
}

/// Tests newest-first ordering.
///
/// Expected: Ok with the most recently created livery first
#[tokio::test]
async fn orders_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_livery_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let older = factory::livery::LiveryFactory::new(db, user.id)
        .approved()
        .created_at(Utc::now() - Duration::days(2))
        .build()
        .await?;
    let newer = factory::livery::LiveryFactory::new(db, user.id)
        .approved()
        .created_at(Utc::now() - Duration::days(1))
        .build()
        .await?;

    let liveries = LiveryRepository::new(db)
        .get_approved_filtered(&LiveryFilter::default())
        .await?;

    let ids: Vec<i32> = liveries.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}

/// Tests exact filters on manufacturer, aircraft and brand.
///
/// Expected: Ok with only the livery matching all three
#[tokio::test]
async fn filters_by_manufacturer_aircraft_and_brand() -> Result<(), AppError> {
    let test = TestBuilder::new().with_livery_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let wanted = factory::livery::LiveryFactory::new(db, user.id)
        .aircraft("A350-900")
        .brand("iniBuilds")
        .approved()
        .build()
        .await?;
    factory::livery::LiveryFactory::new(db, user.id)
        .aircraft("A320neo")
        .brand("iniBuilds")
        .approved()
        .build()
        .await?;
    factory::livery::LiveryFactory::new(db, user.id)
        .manufacturer("Boeing")
        .aircraft("737-800")
        .brand("PMDG")
        .approved()
        .build()
        .await?;

    let filter = LiveryFilter {
        manufacturer: Some(Manufacturer::Airbus),
        aircraft: Some("A350-900".to_string()),
        brand: Some("iniBuilds".to_string()),
        ..Default::default()
    };
    let liveries = LiveryRepository::new(db)
        .get_approved_filtered(&filter)
        .await?;

    assert_eq!(liveries.len(), 1);
    assert_eq!(liveries[0].id, wanted.id);

    Ok(())
}

/// Tests free-text search over name and description.
///
/// Expected: Ok with liveries whose name or description contains the term
#[tokio::test]
async fn searches_name_and_description() -> Result<(), AppError> {
    let test = TestBuilder::new().with_livery_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let by_name = factory::livery::LiveryFactory::new(db, user.id)
        .livery_name("Korean Air HL8001")
        .approved()
        .build()
        .await?;
    let by_description = factory::livery::LiveryFactory::new(db, user.id)
        .livery_name("HL7780")
        .description("Korean Air retro colours")
        .approved()
        .build()
        .await?;
    factory::livery::LiveryFactory::new(db, user.id)
        .livery_name("Air France F-HTYA")
        .approved()
        .build()
        .await?;

    let filter = LiveryFilter {
        search: Some("Korean".to_string()),
        ..Default::default()
    };
    let liveries = LiveryRepository::new(db)
        .get_approved_filtered(&filter)
        .await?;

    let mut ids: Vec<i32> = liveries.iter().map(|l| l.id).collect();
    ids.sort();
    assert_eq!(ids, vec![by_name.id, by_description.id]);

    Ok(())
}

/// Tests limit and offset.
///
/// Expected: Ok with the second page holding the remaining livery
#[tokio::test]
async fn paginates_results() -> Result<(), AppError> {
    let test = TestBuilder::new().with_livery_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    for days in 1..=3 {
        factory::livery::LiveryFactory::new(db, user.id)
            .approved()
            .created_at(Utc::now() - Duration::days(days))
            .build()
            .await?;
    }

    let repo = LiveryRepository::new(db);
    let first_page = repo
        .get_approved_filtered(&LiveryFilter {
            limit: 2,
            ..Default::default()
        })
        .await?;
    let second_page = repo
        .get_approved_filtered(&LiveryFilter {
            limit: 2,
            offset: 2,
            ..Default::default()
        })
        .await?;

    assert_eq!(first_page.len(), 2);
    assert_eq!(second_page.len(), 1);
    assert!(first_page.iter().all(|l| l.id != second_page[0].id));

    Ok(())
}
