//! Livery data repository for database operations.
//!
//! This module provides the `LiveryRepository` for storing uploads, serving the public
//! catalog, tracking downloads and recording moderation verdicts. Listing queries join
//! the uploading user so responses can carry the uploader's name.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Expr, ExprTrait}, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::livery::LiveryStatus,
    server::{
        error::{internal::InternalError, AppError},
        model::livery::{
            CreateLiveryParams, Livery, LiveryFilter, ReviewVerdict, UpdateLiveryParams,
        },
    },
};

fn encode_screenshots(screenshots: &[String]) -> Result<String, AppError> {
    let json = serde_json::to_string(screenshots).map_err(|source| {
        InternalError::InvalidStoredJson {
            field: "livery.screenshots",
            source,
        }
    })?;

    Ok(json)
}

fn into_liveries(
    rows: Vec<(entity::livery::Model, Option<entity::user::Model>)>,
) -> Result<Vec<Livery>, AppError> {
    rows.into_iter()
        .map(|(livery, user)| Livery::from_entity(livery, user))
        .collect()
}

/// Repository providing database operations for liveries.
pub struct LiveryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LiveryRepository<'a> {
    /// Creates a new LiveryRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new livery awaiting review.
    ///
    /// The livery always starts in the `pending` state with a download count of zero.
    ///
    /// # Arguments
    /// - `params` - Validated livery metadata and file references
    ///
    /// # Returns
    /// - `Ok(Livery)` - The created livery, without uploader
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateLiveryParams) -> Result<Livery, AppError> {
        let now = Utc::now();

        let entity = entity::livery::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            manufacturer: ActiveValue::Set(params.manufacturer.as_str().to_string()),
            aircraft: ActiveValue::Set(params.aircraft),
            brand: ActiveValue::Set(params.brand),
            livery_name: ActiveValue::Set(params.livery_name),
            description: ActiveValue::Set(params.description),
            msfs_version: ActiveValue::Set(params.msfs_version.map(|v| v.as_str().to_string())),
            install_method: ActiveValue::Set(params.install_method),
            screenshots: ActiveValue::Set(Some(encode_screenshots(&params.screenshots)?)),
            file_url: ActiveValue::Set(params.file_url),
            file_key: ActiveValue::Set(params.file_key),
            file_name: ActiveValue::Set(params.file_name),
            file_size: ActiveValue::Set(params.file_size),
            download_count: ActiveValue::Set(0),
            status: ActiveValue::Set(LiveryStatus::Pending.as_str().to_string()),
            reviewed_at: ActiveValue::Set(None),
            review_notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Livery::from_entity(entity, None)
    }

    /// Gets a livery by ID together with its uploader, regardless of status.
    ///
    /// # Returns
    /// - `Ok(Some(Livery))` - Livery found
    /// - `Ok(None)` - No livery with that ID
    /// - `Err(AppError)` - Database error or malformed stored row
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Livery>, AppError> {
        let row = entity::prelude::Livery::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        row.map(|(livery, user)| Livery::from_entity(livery, user))
            .transpose()
    }

    /// Lists approved liveries matching the filter, newest first.
    ///
    /// `manufacturer`, `aircraft` and `brand` match exactly; `search` matches a substring
    /// of either the livery name or the description.
    pub async fn get_approved_filtered(
        &self,
        filter: &LiveryFilter,
    ) -> Result<Vec<Livery>, AppError> {
        let mut condition = Condition::all()
            .add(entity::livery::Column::Status.eq(LiveryStatus::Approved.as_str()));

        if let Some(manufacturer) = filter.manufacturer {
            condition =
                condition.add(entity::livery::Column::Manufacturer.eq(manufacturer.as_str()));
        }
        if let Some(aircraft) = &filter.aircraft {
            condition = condition.add(entity::livery::Column::Aircraft.eq(aircraft.as_str()));
        }
        if let Some(brand) = &filter.brand {
            condition = condition.add(entity::livery::Column::Brand.eq(brand.as_str()));
        }
        if let Some(search) = &filter.search {
            condition = condition.add(
                Condition::any()
                    .add(entity::livery::Column::LiveryName.contains(search.as_str()))
                    .add(entity::livery::Column::Description.contains(search.as_str())),
            );
        }

        let rows = entity::prelude::Livery::find()
            .filter(condition)
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::livery::Column::CreatedAt)
            .order_by_desc(entity::livery::Column::Id)
            .limit(filter.limit)
            .offset(filter.offset)
            .all(self.db)
            .await?;

        into_liveries(rows)
    }

    /// Lists every livery uploaded by a user in any status, newest first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Livery>, AppError> {
        let entities = entity::prelude::Livery::find()
            .filter(entity::livery::Column::UserId.eq(user_id))
            .order_by_desc(entity::livery::Column::CreatedAt)
            .order_by_desc(entity::livery::Column::Id)
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(|livery| Livery::from_entity(livery, None))
            .collect()
    }

    /// Lists pending liveries oldest first.
    ///
    /// # Arguments
    /// - `created_before` - When set, only liveries created at or before this instant
    pub async fn get_pending(
        &self,
        created_before: Option<DateTime<Utc>>,
    ) -> Result<Vec<Livery>, AppError> {
        let mut query = entity::prelude::Livery::find()
            .filter(entity::livery::Column::Status.eq(LiveryStatus::Pending.as_str()));

        if let Some(cutoff) = created_before {
            query = query.filter(entity::livery::Column::CreatedAt.lte(cutoff));
        }

        let rows = query
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::livery::Column::CreatedAt)
            .order_by_asc(entity::livery::Column::Id)
            .all(self.db)
            .await?;

        into_liveries(rows)
    }

    /// Applies a partial update and bumps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Livery)` - The updated livery, without uploader
    /// - `Err(AppError::DbErr(RecordNotFound))` - No livery with that ID
    pub async fn update(&self, id: i32, params: UpdateLiveryParams) -> Result<Livery, AppError> {
        let livery = entity::prelude::Livery::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Livery with id {} not found", id)))?;

        let mut active_model: entity::livery::ActiveModel = livery.into();
        if let Some(livery_name) = params.livery_name {
            active_model.livery_name = ActiveValue::Set(livery_name);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(msfs_version) = params.msfs_version {
            active_model.msfs_version = ActiveValue::Set(Some(msfs_version.as_str().to_string()));
        }
        if let Some(install_method) = params.install_method {
            active_model.install_method = ActiveValue::Set(install_method);
        }
        if let Some(screenshots) = params.screenshots {
            active_model.screenshots =
                ActiveValue::Set(Some(encode_screenshots(&screenshots)?));
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Livery::from_entity(entity, None)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        entity::prelude::Livery::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Increments the download counter in a single UPDATE statement.
    ///
    /// # Returns
    /// - `Ok(true)` - Counter incremented
    /// - `Ok(false)` - No livery with that ID
    pub async fn increment_download_count(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Livery::update_many()
            .filter(entity::livery::Column::Id.eq(id))
            .col_expr(
                entity::livery::Column::DownloadCount,
                Expr::col(entity::livery::Column::DownloadCount).add(1),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Records a moderation verdict on a livery.
    ///
    /// # Returns
    /// - `Ok(true)` - Verdict stored
    /// - `Ok(false)` - No livery with that ID
    pub async fn set_review(
        &self,
        id: i32,
        verdict: &ReviewVerdict,
        reviewed_at: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        self.record_review(
            Condition::all().add(entity::livery::Column::Id.eq(id)),
            verdict,
            reviewed_at,
        )
        .await
    }

    /// Records a verdict only while the livery is still pending.
    ///
    /// # Returns
    /// - `Ok(true)` - Verdict stored
    /// - `Ok(false)` - No livery with that ID, or it was already reviewed
    pub async fn set_review_if_pending(
        &self,
        id: i32,
        verdict: &ReviewVerdict,
        reviewed_at: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        self.record_review(
            Condition::all()
                .add(entity::livery::Column::Id.eq(id))
                .add(entity::livery::Column::Status.eq(LiveryStatus::Pending.as_str())),
            verdict,
            reviewed_at,
        )
        .await
    }

    async fn record_review(
        &self,
        condition: Condition,
        verdict: &ReviewVerdict,
        reviewed_at: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let result = entity::prelude::Livery::update_many()
            .filter(condition)
            .col_expr(
                entity::livery::Column::Status,
                Expr::value(verdict.status().as_str()),
            )
            .col_expr(entity::livery::Column::ReviewedAt, Expr::value(reviewed_at))
            .col_expr(
                entity::livery::Column::ReviewNotes,
                Expr::value(verdict.notes.clone()),
            )
            .col_expr(entity::livery::Column::UpdatedAt, Expr::value(reviewed_at))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether any livery still points at a stored file.
    ///
    /// # Arguments
    /// - `key` - Storage key of the file
    /// - `url` - Public URL of the same file, matched against archive and screenshot URLs
    pub async fn is_file_referenced(&self, key: &str, url: &str) -> Result<bool, AppError> {
        let referencing = entity::prelude::Livery::find()
            .select_only()
            .column(entity::livery::Column::Id)
            .filter(
                Condition::any()
                    .add(entity::livery::Column::FileKey.eq(key))
                    .add(entity::livery::Column::FileUrl.eq(url))
                    .add(entity::livery::Column::Screenshots.contains(format!("\"{}\"", url))),
            )
            .into_tuple::<i32>()
            .one(self.db)
            .await?;

        Ok(referencing.is_some())
    }
}
