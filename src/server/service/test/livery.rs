use std::sync::Arc;

use axum::body::Bytes;
use object_store::memory::InMemory;

use crate::{
    model::livery::LiveryStatus,
    server::{
        error::AppError,
        model::{
            livery::{ReviewVerdict, UpdateLiveryParams},
            user::User,
        },
        service::{
            livery::LiveryService,
            upload::{FileStorage, UploadKind},
        },
    },
};
use test_utils::{builder::TestBuilder, factory};

const APP_URL: &str = "http://localhost:8080";

fn storage() -> FileStorage {
    FileStorage::new(Arc::new(InMemory::new()), APP_URL)
}

/// Tests that a pending livery is hidden from everyone but its uploader and admins.
///
/// Expected: NotFound for anonymous and other users, Ok for the owner and an admin
#[tokio::test]
async fn hides_unapproved_livery_from_others() -> Result<(), AppError> {
    let test = TestBuilder::new().with_livery_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = User::from_entity(factory::create_user(db).await?)?;
    let stranger = User::from_entity(factory::create_user(db).await?)?;
    let livery = factory::create_livery(db, owner.id).await?;
    let service = LiveryService::new(db);

    assert!(matches!(
        service.get_visible(livery.id, None).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.get_visible(livery.id, Some(&stranger)).await,
        Err(AppError::NotFound(_))
    ));
    assert_eq!(
        service.get_visible(livery.id, Some(&owner)).await?.id,
        livery.id
    );

    Ok(())
}

/// Tests that admins can open liveries awaiting review.
///
/// Expected: Ok for the detail and the download of a pending livery
#[tokio::test]
async fn admin_sees_pending_livery() -> Result<(), AppError> {
    let test = TestBuilder::new().with_livery_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let admin = User::from_entity(factory::user::create_admin(db).await?)?;
    let livery = factory::create_livery(db, owner.id).await?;
    let service = LiveryService::new(db);

    let seen = service.get_visible(livery.id, Some(&admin)).await?;
    assert_eq!(seen.status, LiveryStatus::Pending);

    let downloaded = service.download(livery.id, Some(&admin)).await?;
    assert_eq!(downloaded.download_count, 1);

    Ok(())
}

/// Tests counting downloads of an approved livery.
///
/// Expected: Ok with the counter incremented in the response and the database
#[tokio::test]
async fn counts_downloads() -> Result<(), AppError> {
    let test = TestBuilder::new().with_livery_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let livery = factory::livery::create_approved_livery(db, owner.id).await?;
    let service = LiveryService::new(db);

    let downloaded = service.download(livery.id, None).await?;
    assert_eq!(downloaded.download_count, 1);

    let stored = service.get_visible(livery.id, None).await?;
    assert_eq!(stored.download_count, 1);

    Ok(())
}

/// Tests that only the uploader may edit a livery.
///
/// Expected: Err(AppError::Forbidden) for another user, Ok for the owner
#[tokio::test]
async fn only_owner_can_update() -> Result<(), AppError> {
    let test = TestBuilder::new().with_livery_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let livery = factory::livery::create_approved_livery(db, owner.id).await?;
    let service = LiveryService::new(db);
    let params = UpdateLiveryParams {
        livery_name: Some("Renamed".to_string()),
        ..Default::default()
    };

    let storage = storage();

    let denied = service
        .update(livery.id, stranger.id, params.clone(), &storage)
        .await;
    let updated = service.update(livery.id, owner.id, params, &storage).await?;

    assert!(matches!(denied, Err(AppError::Forbidden(_))));
    assert_eq!(updated.livery_name, "Renamed");
    assert_eq!(updated.status, LiveryStatus::Approved);

    Ok(())
}

/// Tests updating a livery that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn update_of_missing_livery_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_livery_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let result = LiveryService::new(db)
        .update(999, owner.id, UpdateLiveryParams::default(), &storage())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests deleting a livery together with its stored files.
///
/// Verifies that the archive and every screenshot stored on this server are removed.
///
/// Expected: Ok and all stored objects gone
#[tokio::test]
async fn delete_removes_row_and_files() -> Result<(), AppError> {
    let test = TestBuilder::new().with_livery_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = storage();

    let archive = storage
        .upload(UploadKind::Livery, Some("paint.zip"), Bytes::from_static(b"zip"))
        .await?;
    let screenshot = storage
        .upload(
            UploadKind::Screenshot,
            Some("shot.png"),
            Bytes::from_static(b"png"),
        )
        .await?;

    let owner = factory::create_user(db).await?;
    let livery = factory::livery::LiveryFactory::new(db, owner.id)
        .file_key(archive.key.clone())
        .screenshots(vec![screenshot.url.clone()])
        .build()
        .await?;
    let service = LiveryService::new(db);

    service.delete(livery.id, owner.id, &storage).await?;

    assert!(matches!(
        service.get_visible(livery.id, None).await,
        Err(AppError::NotFound(_))
    ));
    assert!(storage.get(&archive.key).await.is_err());
    assert!(storage.get(&screenshot.key).await.is_err());

    Ok(())
}

/// Tests deleting a livery that points at another user's stored files.
///
/// Expected: Ok and the first uploader's archive and screenshot still stored
#[tokio::test]
async fn delete_keeps_files_used_by_other_liveries() -> Result<(), AppError> {
    let test = TestBuilder::new().with_livery_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = storage();

    let archive = storage
        .upload(UploadKind::Livery, Some("paint.zip"), Bytes::from_static(b"zip"))
        .await?;
    let screenshot = storage
        .upload(
            UploadKind::Screenshot,
            Some("shot.png"),
            Bytes::from_static(b"png"),
        )
        .await?;

    let uploader = factory::create_user(db).await?;
    let copier = factory::create_user(db).await?;
    let original = factory::livery::LiveryFactory::new(db, uploader.id)
        .file_key(archive.key.clone())
        .screenshots(vec![screenshot.url.clone()])
        .build()
        .await?;
    let copy = factory::livery::LiveryFactory::new(db, copier.id)
        .file_key(archive.key.clone())
        .screenshots(vec![screenshot.url.clone()])
        .build()
        .await?;
    let service = LiveryService::new(db);

    service.delete(copy.id, copier.id, &storage).await?;

    let uploader = User::from_entity(uploader)?;
    assert!(service.get_visible(original.id, Some(&uploader)).await.is_ok());
    assert!(storage.get(&archive.key).await.is_ok());
    assert!(storage.get(&screenshot.key).await.is_ok());

    Ok(())
}

/// Tests that dropping screenshots in an update removes their files.
///
/// Expected: Ok with the dropped screenshot deleted and the kept one still stored
#[tokio::test]
async fn update_removes_dropped_screenshots() -> Result<(), AppError> {
    let test = TestBuilder::new().with_livery_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = storage();

    let kept = storage
        .upload(UploadKind::Screenshot, Some("a.png"), Bytes::from_static(b"a"))
        .await?;
    let dropped = storage
        .upload(UploadKind::Screenshot, Some("b.png"), Bytes::from_static(b"b"))
        .await?;

    let owner = factory::create_user(db).await?;
    let livery = factory::livery::LiveryFactory::new(db, owner.id)
        .screenshots(vec![kept.url.clone(), dropped.url.clone()])
        .build()
        .await?;

    let updated = LiveryService::new(db)
        .update(
            livery.id,
            owner.id,
            UpdateLiveryParams {
                screenshots: Some(vec![kept.url.clone()]),
                ..Default::default()
            },
            &storage,
        )
        .await?;

    assert_eq!(updated.screenshots, vec![kept.url.clone()]);
    assert!(storage.get(&kept.key).await.is_ok());
    assert!(storage.get(&dropped.key).await.is_err());

    Ok(())
}

/// Tests that an update cannot point screenshots at files stored elsewhere.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn update_rejects_foreign_screenshots() -> Result<(), AppError> {
    let test = TestBuilder::new().with_livery_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let livery = factory::create_livery(db, owner.id).await?;

    let result = LiveryService::new(db)
        .update(
            livery.id,
            owner.id,
            UpdateLiveryParams {
                screenshots: Some(vec!["https://cdn.example.com/a.jpg".to_string()]),
                ..Default::default()
            },
            &storage(),
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that another user cannot delete a livery.
///
/// Expected: Err(AppError::Forbidden) and the livery still present
#[tokio::test]
async fn only_owner_can_delete() -> Result<(), AppError> {
    let test = TestBuilder::new().with_livery_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = storage();

    let owner = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let livery = factory::livery::create_approved_livery(db, owner.id).await?;
    let service = LiveryService::new(db);

    let result = service.delete(livery.id, stranger.id, &storage).await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));
    assert!(service.get_visible(livery.id, None).await.is_ok());

    Ok(())
}

/// Tests a manual moderation verdict.
///
/// Expected: Ok with the livery approved and visible to everyone
#[tokio::test]
async fn review_publishes_livery() -> Result<(), AppError> {
    let test = TestBuilder::new().with_livery_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let livery = factory::create_livery(db, owner.id).await?;
    let service = LiveryService::new(db);

    let reviewed = service
        .review(
            livery.id,
            ReviewVerdict {
                approved: true,
                notes: "Checked by hand".to_string(),
            },
        )
        .await?;

    assert_eq!(reviewed.status, LiveryStatus::Approved);
    assert!(service.get_visible(livery.id, None).await.is_ok());
    assert!(service.get_pending().await?.is_empty());

    Ok(())
}
