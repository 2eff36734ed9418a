//! Livery service for business logic.
//!
//! Validates uploads against field limits and the aircraft brand restrictions, enforces
//! visibility of unapproved liveries and ownership for edits, and cleans up stored files
//! once no livery references them.

use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        aircraft::{allowed_brands, is_brand_allowed},
        livery::MAX_SCREENSHOTS,
    },
    server::{
        data::livery::LiveryRepository,
        error::AppError,
        model::{
            livery::{CreateLiveryParams, Livery, LiveryFilter, ReviewVerdict, UpdateLiveryParams},
            user::User,
        },
        service::upload::{FileStorage, UploadKind},
        util::validate::require_len,
    },
};

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Livery {} not found", id))
}

fn validate_screenshots(screenshots: &[String], storage: &FileStorage) -> Result<(), AppError> {
    if screenshots.len() > MAX_SCREENSHOTS {
        return Err(AppError::BadRequest(format!(
            "At most {} screenshots are allowed",
            MAX_SCREENSHOTS
        )));
    }
    if screenshots.iter().any(|url| url.trim().is_empty()) {
        return Err(AppError::BadRequest(
            "Screenshot URLs must not be empty".to_string(),
        ));
    }
    if screenshots
        .iter()
        .any(|url| storage.key_of_kind(url, UploadKind::Screenshot).is_none())
    {
        return Err(AppError::BadRequest(
            "Screenshots must be uploaded to this site".to_string(),
        ));
    }

    Ok(())
}

/// Rejects brands outside the allow-list of restricted aircraft families.
pub fn validate_brand(aircraft: &str, brand: &str) -> Result<(), AppError> {
    if is_brand_allowed(aircraft, brand) {
        return Ok(());
    }

    Err(AppError::BadRequest(format!(
        "{} only accepts the {} brand",
        aircraft,
        allowed_brands(aircraft).join(" or ")
    )))
}

/// Checks the fields of a new livery and that its files were uploaded to `storage`.
pub fn validate_create(
    params: &CreateLiveryParams,
    storage: &FileStorage,
) -> Result<(), AppError> {
    require_len("Aircraft", &params.aircraft, 1, 64)?;
    require_len("Brand", &params.brand, 1, 128)?;
    require_len("Livery name", &params.livery_name, 1, 256)?;
    validate_screenshots(&params.screenshots, storage)?;

    if params.file_url.is_empty() || params.file_key.is_empty() {
        return Err(AppError::BadRequest("A livery file is required".to_string()));
    }
    if !UploadKind::Livery.owns_key(&params.file_key)
        || params.file_url != storage.public_url(&params.file_key)
    {
        return Err(AppError::BadRequest(
            "The livery file must be uploaded to this site".to_string(),
        ));
    }
    if params.file_size.is_some_and(|size| size < 0) {
        return Err(AppError::BadRequest(
            "File size must not be negative".to_string(),
        ));
    }

    validate_brand(&params.aircraft, &params.brand)
}

fn validate_update(params: &UpdateLiveryParams, storage: &FileStorage) -> Result<(), AppError> {
    if let Some(livery_name) = &params.livery_name {
        require_len("Livery name", livery_name, 1, 256)?;
    }
    if let Some(screenshots) = &params.screenshots {
        validate_screenshots(screenshots, storage)?;
    }

    Ok(())
}

pub struct LiveryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LiveryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new livery in the `pending` state.
    ///
    /// # Returns
    /// - `Ok(Livery)` - The created livery
    /// - `Err(AppError::BadRequest)` - Invalid fields, a disallowed brand, or files not
    ///   stored in `storage`
    pub async fn create(
        &self,
        params: CreateLiveryParams,
        storage: &FileStorage,
    ) -> Result<Livery, AppError> {
        validate_create(&params, storage)?;

        LiveryRepository::new(self.db).create(params).await
    }

    /// Lists approved liveries matching the filter.
    pub async fn list(&self, filter: &LiveryFilter) -> Result<Vec<Livery>, AppError> {
        LiveryRepository::new(self.db)
            .get_approved_filtered(filter)
            .await
    }

    /// Gets a livery the viewer is allowed to see.
    ///
    /// Unapproved liveries of other users are reported as missing unless the viewer is an
    /// admin.
    pub async fn get_visible(&self, id: i32, viewer: Option<&User>) -> Result<Livery, AppError> {
        LiveryRepository::new(self.db)
            .get_by_id(id)
            .await?
            .filter(|livery| livery.is_visible_to(viewer))
            .ok_or_else(|| not_found(id))
    }

    /// Counts a download and returns the livery with the updated counter.
    pub async fn download(&self, id: i32, viewer: Option<&User>) -> Result<Livery, AppError> {
        let mut livery = self.get_visible(id, viewer).await?;

        if !LiveryRepository::new(self.db)
            .increment_download_count(id)
            .await?
        {
            return Err(not_found(id));
        }
        livery.download_count += 1;

        Ok(livery)
    }

    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Livery>, AppError> {
        LiveryRepository::new(self.db).get_by_user(user_id).await
    }

    /// Loads a livery for modification by `user_id`.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No livery with that ID
    /// - `Err(AppError::Forbidden)` - The livery belongs to someone else
    async fn get_owned(&self, id: i32, user_id: i32) -> Result<Livery, AppError> {
        let livery = LiveryRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        if !livery.is_owned_by(user_id) {
            return Err(AppError::Forbidden(
                "You can only modify your own liveries".to_string(),
            ));
        }

        Ok(livery)
    }

    /// Applies a partial update to the caller's own livery.
    ///
    /// Screenshots dropped from the list are removed from storage.
    pub async fn update(
        &self,
        id: i32,
        user_id: i32,
        params: UpdateLiveryParams,
        storage: &FileStorage,
    ) -> Result<Livery, AppError> {
        let existing = self.get_owned(id, user_id).await?;
        validate_update(&params, storage)?;

        let removed: Vec<String> = match &params.screenshots {
            Some(screenshots) => existing
                .screenshots
                .into_iter()
                .filter(|url| !screenshots.contains(url))
                .collect(),
            None => Vec::new(),
        };

        let updated = LiveryRepository::new(self.db).update(id, params).await?;

        let files = removed
            .into_iter()
            .filter_map(|url| storage.key_from_url(&url).map(|key| (key, url)));
        self.delete_unreferenced(storage, files).await?;

        Ok(updated)
    }

    /// Deletes the caller's own livery, then its stored archive and screenshots.
    pub async fn delete(
        &self,
        id: i32,
        user_id: i32,
        storage: &FileStorage,
    ) -> Result<(), AppError> {
        let livery = self.get_owned(id, user_id).await?;

        LiveryRepository::new(self.db).delete(id).await?;

        let screenshots = livery
            .screenshots
            .into_iter()
            .filter_map(|url| storage.key_from_url(&url).map(|key| (key, url)));
        let files = std::iter::once((livery.file_key, livery.file_url)).chain(screenshots);
        self.delete_unreferenced(storage, files).await
    }

    /// Removes `(key, url)` files from storage unless another livery still uses them.
    async fn delete_unreferenced(
        &self,
        storage: &FileStorage,
        files: impl IntoIterator<Item = (String, String)>,
    ) -> Result<(), AppError> {
        let livery_repo = LiveryRepository::new(self.db);

        let mut orphaned = Vec::new();
        for (key, url) in files {
            if livery_repo.is_file_referenced(&key, &url).await? {
                tracing::info!("Keeping stored file {} still used by another livery", key);
            } else {
                orphaned.push(key);
            }
        }
        storage.delete_best_effort(orphaned).await;

        Ok(())
    }

    /// Pending liveries oldest first, for manual moderation.
    pub async fn get_pending(&self) -> Result<Vec<Livery>, AppError> {
        LiveryRepository::new(self.db).get_pending(None).await
    }

    /// Applies a moderation verdict.
    pub async fn review(&self, id: i32, verdict: ReviewVerdict) -> Result<Livery, AppError> {
        let livery_repo = LiveryRepository::new(self.db);

        if !livery_repo.set_review(id, &verdict, Utc::now()).await? {
            return Err(not_found(id));
        }

        livery_repo.get_by_id(id).await?.ok_or_else(|| not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use object_store::memory::InMemory;

    use super::*;
    use crate::model::livery::Manufacturer;

    fn storage() -> FileStorage {
        FileStorage::new(Arc::new(InMemory::new()), "http://localhost:8080")
    }

    fn params(aircraft: &str, brand: &str) -> CreateLiveryParams {
        CreateLiveryParams {
            user_id: 1,
            manufacturer: Manufacturer::Airbus,
            aircraft: aircraft.to_string(),
            brand: brand.to_string(),
            livery_name: "Korean Air HL7777".to_string(),
            description: None,
            msfs_version: None,
            install_method: None,
            screenshots: vec![],
            file_url: "http://localhost:8080/files/liveries/a.zip".to_string(),
            file_key: "liveries/a.zip".to_string(),
            file_name: Some("a.zip".to_string()),
            file_size: Some(1024),
        }
    }

    #[test]
    fn rejects_non_inibuilds_a340_and_a350() {
        let storage = storage();

        let err = validate_create(&params("A340-300", "FBW"), &storage).unwrap_err();
        assert_eq!(err.to_string(), "A340-300 only accepts the iniBuilds brand");

        let err = validate_create(&params("A350-900", "Fenix"), &storage).unwrap_err();
        assert_eq!(err.to_string(), "A350-900 only accepts the iniBuilds brand");
    }

    #[test]
    fn accepts_allowed_combinations() {
        let storage = storage();

        assert!(validate_create(&params("A340-300", "iniBuilds"), &storage).is_ok());
        assert!(validate_create(&params("A330-300", "iniBuilds"), &storage).is_ok());
        assert!(validate_create(&params("A320neo", "FBW"), &storage).is_ok());
    }

    #[test]
    fn rejects_too_many_screenshots() {
        let mut params = params("A320neo", "Fenix");
        params.screenshots = vec!["http://localhost:8080/files/screenshots/a.jpg".to_string(); 5];

        assert!(matches!(
            validate_create(&params, &storage()),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn rejects_missing_file() {
        let mut params = params("B777", "PMDG");
        params.file_url.clear();

        assert!(matches!(
            validate_create(&params, &storage()),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn rejects_archive_outside_livery_uploads() {
        let storage = storage();

        let mut screenshot_key = params("B777", "PMDG");
        screenshot_key.file_key = "screenshots/a.jpg".to_string();
        screenshot_key.file_url = "http://localhost:8080/files/screenshots/a.jpg".to_string();
        assert!(matches!(
            validate_create(&screenshot_key, &storage),
            Err(AppError::BadRequest(_))
        ));

        let mut mismatched_url = params("B777", "PMDG");
        mismatched_url.file_url = "https://cdn.example.com/liveries/a.zip".to_string();
        assert!(matches!(
            validate_create(&mismatched_url, &storage),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn rejects_screenshots_not_stored_here() {
        let storage = storage();

        let mut foreign = params("B777", "PMDG");
        foreign.screenshots = vec!["https://cdn.example.com/a.jpg".to_string()];
        assert!(validate_create(&foreign, &storage).is_err());

        let mut archive_as_screenshot = params("B777", "PMDG");
        archive_as_screenshot.screenshots =
            vec!["http://localhost:8080/files/liveries/b.zip".to_string()];
        assert!(validate_create(&archive_as_screenshot, &storage).is_err());

        let update = UpdateLiveryParams {
            screenshots: Some(vec!["https://cdn.example.com/a.jpg".to_string()]),
            ..Default::default()
        };
        assert!(validate_update(&update, &storage).is_err());
    }
}
