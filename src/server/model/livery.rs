//! Livery domain models and parameters.
//!
//! Provides the livery domain model with its moderation state and the parameter
//! types used for creation, partial updates, listing filters and review verdicts.
//! Screenshots are stored as a JSON array in a text column and decoded here.

use chrono::{DateTime, Utc};

use crate::{
    model::livery::{
        CreateLiveryDto, DownloadDto, LiveryDto, LiveryFilterDto, LiveryStatus, Manufacturer,
        MsfsVersion, UpdateLiveryDto, UploaderDto, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT,
    },
    server::{
        error::AppError,
        model::user::User,
        util::parse::{parse_stored, parse_stored_json},
    },
};

/// Public identity of the user who uploaded a livery.
#[derive(Debug, Clone, PartialEq)]
pub struct Uploader {
    pub id: i32,
    pub username: String,
}

/// Uploaded livery with metadata, file references and moderation state.
#[derive(Debug, Clone, PartialEq)]
pub struct Livery {
    pub id: i32,
    pub user_id: i32,
    pub manufacturer: Manufacturer,
    pub aircraft: String,
    pub brand: String,
    pub livery_name: String,
    pub description: Option<String>,
    pub msfs_version: Option<MsfsVersion>,
    pub install_method: Option<String>,
    pub screenshots: Vec<String>,
    pub file_url: String,
    /// Object storage key of the livery archive.
    pub file_key: String,
    pub file_name: Option<String>,
    pub file_size: Option<i64>,
    pub download_count: i32,
    pub status: LiveryStatus,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub review_notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Only populated by queries that join the uploading user.
    pub uploader: Option<Uploader>,
}

impl Livery {
    pub fn is_owned_by(&self, user_id: i32) -> bool {
        self.user_id == user_id
    }

    /// Whether the livery may be shown to the given viewer.
    ///
    /// Approved liveries are public, anything else is only visible to its owner and admins.
    pub fn is_visible_to(&self, viewer: Option<&User>) -> bool {
        self.status == LiveryStatus::Approved
            || viewer.is_some_and(|user| user.is_admin() || self.is_owned_by(user.id))
    }

    pub fn into_dto(self) -> LiveryDto {
        LiveryDto {
            id: self.id,
            user_id: self.user_id,
            manufacturer: self.manufacturer,
            aircraft: self.aircraft,
            brand: self.brand,
            livery_name: self.livery_name,
            description: self.description,
            msfs_version: self.msfs_version,
            install_method: self.install_method,
            screenshots: self.screenshots,
            file_url: self.file_url,
            file_name: self.file_name,
            file_size: self.file_size,
            download_count: self.download_count,
            status: self.status,
            review_notes: self.review_notes,
            reviewed_at: self.reviewed_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
            uploader: self.uploader.map(|u| UploaderDto {
                id: u.id,
                username: u.username,
            }),
        }
    }

    pub fn into_download_dto(self) -> DownloadDto {
        DownloadDto {
            file_url: self.file_url,
            file_name: self.file_name,
        }
    }

    /// Converts an entity model, optionally joined with its uploader, at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Livery)` - The converted livery domain model
    /// - `Err(AppError::InternalErr(_))` - A stored enum or the screenshots JSON is malformed
    pub fn from_entity(
        entity: entity::livery::Model,
        uploader: Option<entity::user::Model>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            manufacturer: parse_stored("livery.manufacturer", &entity.manufacturer)?,
            aircraft: entity.aircraft,
            brand: entity.brand,
            livery_name: entity.livery_name,
            description: entity.description,
            msfs_version: entity
                .msfs_version
                .as_deref()
                .map(|v| parse_stored("livery.msfs_version", v))
                .transpose()?,
            install_method: entity.install_method,
            screenshots: parse_stored_json("livery.screenshots", entity.screenshots.as_deref())?,
            file_url: entity.file_url,
            file_key: entity.file_key,
            file_name: entity.file_name,
            file_size: entity.file_size,
            download_count: entity.download_count,
            status: parse_stored("livery.status", &entity.status)?,
            reviewed_at: entity.reviewed_at,
            review_notes: entity.review_notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            uploader: uploader.map(|user| Uploader {
                id: user.id,
                username: user.username,
            }),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parameters for inserting a livery owned by `user_id`.
#[derive(Debug, Clone)]
pub struct CreateLiveryParams {
    pub user_id: i32,
    pub manufacturer: Manufacturer,
    pub aircraft: String,
    pub brand: String,
    pub livery_name: String,
    pub description: Option<String>,
    pub msfs_version: Option<MsfsVersion>,
    pub install_method: Option<String>,
    pub screenshots: Vec<String>,
    pub file_url: String,
    pub file_key: String,
    pub file_name: Option<String>,
    pub file_size: Option<i64>,
}

impl CreateLiveryParams {
    /// Trims text fields and turns empty optional fields into `None`.
    pub fn from_dto(user_id: i32, dto: CreateLiveryDto) -> Self {
        Self {
            user_id,
            manufacturer: dto.manufacturer,
            aircraft: dto.aircraft.trim().to_string(),
            brand: dto.brand.trim().to_string(),
            livery_name: dto.livery_name.trim().to_string(),
            description: non_empty(dto.description),
            msfs_version: dto.msfs_version,
            install_method: non_empty(dto.install_method),
            screenshots: dto.screenshots,
            file_url: dto.file_url.trim().to_string(),
            file_key: dto.file_key.trim().to_string(),
            file_name: non_empty(dto.file_name),
            file_size: dto.file_size,
        }
    }
}

/// Partial update of an existing livery. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateLiveryParams {
    pub livery_name: Option<String>,
    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,
    pub msfs_version: Option<MsfsVersion>,
    pub install_method: Option<Option<String>>,
    pub screenshots: Option<Vec<String>>,
}

impl UpdateLiveryParams {
    pub fn from_dto(dto: UpdateLiveryDto) -> Self {
        Self {
            livery_name: dto.livery_name.map(|name| name.trim().to_string()),
            description: dto.description.map(|d| non_empty(Some(d))),
            msfs_version: dto.msfs_version,
            install_method: dto.install_method.map(|m| non_empty(Some(m))),
            screenshots: dto.screenshots,
        }
    }
}

/// Validated filter for the public listing.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveryFilter {
    pub manufacturer: Option<Manufacturer>,
    pub aircraft: Option<String>,
    pub brand: Option<String>,
    /// Substring matched against the livery name and description.
    pub search: Option<String>,
    pub limit: u64,
    pub offset: u64,
}

impl Default for LiveryFilter {
    fn default() -> Self {
        Self {
            manufacturer: None,
            aircraft: None,
            brand: None,
            search: None,
            limit: DEFAULT_LIST_LIMIT,
            offset: 0,
        }
    }
}

impl LiveryFilter {
    /// Applies defaults and rejects a page size outside `1..=100`.
    pub fn from_dto(dto: LiveryFilterDto) -> Result<Self, AppError> {
        let limit = dto.limit.unwrap_or(DEFAULT_LIST_LIMIT);
        if !(1..=MAX_LIST_LIMIT).contains(&limit) {
            return Err(AppError::BadRequest(format!(
                "limit must be between 1 and {}",
                MAX_LIST_LIMIT
            )));
        }

        Ok(Self {
            manufacturer: dto.manufacturer,
            aircraft: non_empty(dto.aircraft),
            brand: non_empty(dto.brand),
            search: non_empty(dto.search),
            limit,
            offset: dto.offset.unwrap_or(0),
        })
    }
}

/// Moderation outcome applied to a pending livery.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewVerdict {
    pub approved: bool,
    pub notes: String,
}

impl ReviewVerdict {
    pub fn status(&self) -> LiveryStatus {
        if self.approved {
            LiveryStatus::Approved
        } else {
            LiveryStatus::Rejected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_defaults_to_first_page() {
        let filter = LiveryFilter::from_dto(LiveryFilterDto::default()).unwrap();
        assert_eq!(filter, LiveryFilter::default());
    }

    #[test]
    fn filter_rejects_out_of_range_limit() {
        for limit in [0, MAX_LIST_LIMIT + 1] {
            let dto = LiveryFilterDto {
                limit: Some(limit),
                ..Default::default()
            };
            assert!(matches!(
                LiveryFilter::from_dto(dto),
                Err(AppError::BadRequest(_))
            ));
        }
    }

    #[test]
    fn blank_update_description_clears_it() {
        let params = UpdateLiveryParams::from_dto(UpdateLiveryDto {
            description: Some("   ".to_string()),
            ..Default::default()
        });
        assert_eq!(params.description, Some(None));
        assert!(params.livery_name.is_none());
    }
}
