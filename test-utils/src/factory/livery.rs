//! Livery factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for livery rows.
///
/// Defaults: Airbus A320neo by FlyByWire, pending review, no screenshots, zero downloads. The
/// stored file key is `liveries/livery-{id}.zip` with a matching `/files/` URL.
pub struct LiveryFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    manufacturer: String,
    aircraft: String,
    brand: String,
    livery_name: String,
    description: Option<String>,
    screenshots: Vec<String>,
    file_key: String,
    status: String,
    download_count: i32,
    created_at: DateTime<Utc>,
}

impl<'a> LiveryFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            manufacturer: "Airbus".to_string(),
            aircraft: "A320neo".to_string(),
            brand: "FlyByWire".to_string(),
            livery_name: format!("Livery {}", id),
            description: None,
            screenshots: Vec::new(),
            file_key: format!("liveries/livery-{}.zip", id),
            status: "pending".to_string(),
            download_count: 0,
            created_at: Utc::now(),
        }
    }

    pub fn manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = manufacturer.into();
        self
    }

    pub fn aircraft(mut self, aircraft: impl Into<String>) -> Self {
        self.aircraft = aircraft.into();
        self
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn livery_name(mut self, livery_name: impl Into<String>) -> Self {
        self.livery_name = livery_name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn screenshots(mut self, screenshots: Vec<String>) -> Self {
        self.screenshots = screenshots;
        self
    }

    pub fn file_key(mut self, file_key: impl Into<String>) -> Self {
        self.file_key = file_key.into();
        self
    }

    /// Stored status, one of `pending`, `approved` or `rejected`.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn approved(self) -> Self {
        self.status("approved")
    }

    pub fn rejected(self) -> Self {
        self.status("rejected")
    }

    pub fn download_count(mut self, download_count: i32) -> Self {
        self.download_count = download_count;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::livery::Model, DbErr> {
        let screenshots = if self.screenshots.is_empty() {
            None
        } else {
            Some(serde_json::to_string(&self.screenshots).map_err(|e| DbErr::Custom(e.to_string()))?)
        };
        let file_name = self.file_key.rsplit('/').next().map(str::to_string);

        entity::livery::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            manufacturer: ActiveValue::Set(self.manufacturer),
            aircraft: ActiveValue::Set(self.aircraft),
            brand: ActiveValue::Set(self.brand),
            livery_name: ActiveValue::Set(self.livery_name),
            description: ActiveValue::Set(self.description),
            msfs_version: ActiveValue::Set(None),
            install_method: ActiveValue::Set(None),
            screenshots: ActiveValue::Set(screenshots),
            file_url: ActiveValue::Set(format!("http://localhost:8080/files/{}", self.file_key)),
            file_key: ActiveValue::Set(self.file_key),
            file_name: ActiveValue::Set(file_name),
            file_size: ActiveValue::Set(Some(1024)),
            download_count: ActiveValue::Set(self.download_count),
            status: ActiveValue::Set(self.status),
            reviewed_at: ActiveValue::Set(None),
            review_notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending livery owned by `user_id`.
pub async fn create_livery(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::livery::Model, DbErr> {
    LiveryFactory::new(db, user_id).build().await
}

/// Creates an approved livery owned by `user_id`.
pub async fn create_approved_livery(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::livery::Model, DbErr> {
    LiveryFactory::new(db, user_id).approved().build().await
}
