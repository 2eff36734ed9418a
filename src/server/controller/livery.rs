use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        livery::{
            CreateLiveryDto, CreatedLiveryDto, DownloadDto, LiveryDto, LiveryFilterDto,
            UpdateLiveryDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken},
        model::livery::{CreateLiveryParams, LiveryFilter, UpdateLiveryParams},
        service::livery::LiveryService,
        state::AppState,
    },
};

/// Tag for grouping livery endpoints in OpenAPI documentation
pub static LIVERY_TAG: &str = "livery";

/// List approved liveries.
///
/// Public catalog, newest first. Supports exact filters on manufacturer, aircraft and
/// brand, a substring search over name and description, and limit/offset paging.
///
/// # Returns
/// - `200 OK` - Matching liveries with their uploader
/// - `400 Bad Request` - Limit outside 1..=100
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/liveries",
    tag = LIVERY_TAG,
    params(LiveryFilterDto),
    responses(
        (status = 200, description = "Approved liveries", body = Vec<LiveryDto>),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_liveries(
    State(state): State<AppState>,
    Query(params): Query<LiveryFilterDto>,
) -> Result<impl IntoResponse, AppError> {
    let filter = LiveryFilter::from_dto(params)?;
    let liveries = LiveryService::new(&state.db).list(&filter).await?;

    let dtos: Vec<LiveryDto> = liveries.into_iter().map(|l| l.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Upload a new livery.
///
/// The livery file and screenshots must already be stored through the upload endpoints.
/// New liveries start out pending review.
///
/// # Access Control
/// - Any logged in user
///
/// # Returns
/// - `201 Created` - ID of the new livery
/// - `400 Bad Request` - Invalid fields or a brand not allowed for the aircraft
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/api/liveries",
    tag = LIVERY_TAG,
    request_body = CreateLiveryDto,
    responses(
        (status = 201, description = "Livery created", body = CreatedLiveryDto),
        (status = 400, description = "Invalid livery data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_livery(
    State(state): State<AppState>,
    session: Session,
    bearer: BearerToken,
    Json(payload): Json<CreateLiveryDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .with_bearer(&state.tokens, &bearer)
        .require(&[])
        .await?;

    let params = CreateLiveryParams::from_dto(user.id, payload);
    let livery = LiveryService::new(&state.db).create(params, &state.storage).await?;

    Ok((StatusCode::CREATED, Json(CreatedLiveryDto { id: livery.id })))
}

/// Get a livery by ID.
///
/// Approved liveries are public; pending and rejected ones are only visible to their
/// uploader and to admins.
#[utoipa::path(
    get,
    path = "/api/liveries/{livery_id}",
    tag = LIVERY_TAG,
    params(
        ("livery_id" = i32, Path, description = "Livery ID")
    ),
    responses(
        (status = 200, description = "The livery", body = LiveryDto),
        (status = 404, description = "Livery not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_livery(
    State(state): State<AppState>,
    session: Session,
    bearer: BearerToken,
    Path(livery_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session)
        .with_bearer(&state.tokens, &bearer)
        .current_user()
        .await?;

    let livery = LiveryService::new(&state.db)
        .get_visible(livery_id, viewer.as_ref())
        .await?;

    Ok((StatusCode::OK, Json(livery.into_dto())))
}

/// Update a livery's descriptive fields.
///
/// # Access Control
/// - Only the uploader
///
/// # Returns
/// - `200 OK` - The updated livery
/// - `403 Forbidden` - The livery belongs to another user
/// - `404 Not Found` - No such livery
#[utoipa::path(
    put,
    path = "/api/liveries/{livery_id}",
    tag = LIVERY_TAG,
    params(
        ("livery_id" = i32, Path, description = "Livery ID")
    ),
    request_body = UpdateLiveryDto,
    responses(
        (status = 200, description = "Livery updated", body = LiveryDto),
        (status = 400, description = "Invalid livery data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the uploader", body = ErrorDto),
        (status = 404, description = "Livery not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_livery(
    State(state): State<AppState>,
    session: Session,
    bearer: BearerToken,
    Path(livery_id): Path<i32>,
    Json(payload): Json<UpdateLiveryDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .with_bearer(&state.tokens, &bearer)
        .require(&[])
        .await?;

    let params = UpdateLiveryParams::from_dto(payload);
    let livery = LiveryService::new(&state.db)
        .update(livery_id, user.id, params, &state.storage)
        .await?;

    Ok((StatusCode::OK, Json(livery.into_dto())))
}

/// Delete a livery and its stored files.
///
/// # Access Control
/// - Only the uploader
#[utoipa::path(
    delete,
    path = "/api/liveries/{livery_id}",
    tag = LIVERY_TAG,
    params(
        ("livery_id" = i32, Path, description = "Livery ID")
    ),
    responses(
        (status = 204, description = "Livery deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the uploader", body = ErrorDto),
        (status = 404, description = "Livery not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_livery(
    State(state): State<AppState>,
    session: Session,
    bearer: BearerToken,
    Path(livery_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .with_bearer(&state.tokens, &bearer)
        .require(&[])
        .await?;

    LiveryService::new(&state.db)
        .delete(livery_id, user.id, &state.storage)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Count a download and return the file location.
#[utoipa::path(
    post,
    path = "/api/liveries/{livery_id}/download",
    tag = LIVERY_TAG,
    params(
        ("livery_id" = i32, Path, description = "Livery ID")
    ),
    responses(
        (status = 200, description = "File location", body = DownloadDto),
        (status = 404, description = "Livery not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn download_livery(
    State(state): State<AppState>,
    session: Session,
    bearer: BearerToken,
    Path(livery_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session)
        .with_bearer(&state.tokens, &bearer)
        .current_user()
        .await?;

    let livery = LiveryService::new(&state.db)
        .download(livery_id, viewer.as_ref())
        .await?;

    Ok((StatusCode::OK, Json(livery.into_download_dto())))
}

/// List the current user's liveries in any status, newest first.
#[utoipa::path(
    get,
    path = "/api/user/liveries",
    tag = LIVERY_TAG,
    responses(
        (status = 200, description = "The user's liveries", body = Vec<LiveryDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_liveries(
    State(state): State<AppState>,
    session: Session,
    bearer: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .with_bearer(&state.tokens, &bearer)
        .require(&[])
        .await?;

    let liveries = LiveryService::new(&state.db).get_by_user(user.id).await?;
    let dtos: Vec<LiveryDto> = liveries.into_iter().map(|l| l.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
