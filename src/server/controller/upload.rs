use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, upload::UploadedFileDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken},
        service::upload::UploadKind,
        state::AppState,
    },
};

/// Tag for grouping upload endpoints in OpenAPI documentation
pub static UPLOAD_TAG: &str = "upload";

/// Name of the multipart field carrying the file.
const FILE_FIELD: &str = "file";

async fn store_upload(
    state: &AppState,
    kind: UploadKind,
    mut multipart: Multipart,
) -> Result<UploadedFileDto, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let data = field.bytes().await?;
        if data.is_empty() {
            return Err(AppError::BadRequest("Uploaded file is empty".to_string()));
        }

        let stored = state
            .storage
            .upload(kind, file_name.as_deref(), data)
            .await?;

        return Ok(UploadedFileDto {
            url: stored.url,
            key: stored.key,
        });
    }

    Err(AppError::BadRequest("No file provided".to_string()))
}

/// Upload a livery screenshot.
///
/// Multipart form with a single `file` field.
///
/// # Access Control
/// - Any logged in user
#[utoipa::path(
    post,
    path = "/api/upload-screenshot",
    tag = UPLOAD_TAG,
    request_body(content_type = "multipart/form-data", description = "Form with a `file` field"),
    responses(
        (status = 200, description = "Stored file location", body = UploadedFileDto),
        (status = 400, description = "No file provided", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_screenshot(
    State(state): State<AppState>,
    session: Session,
    bearer: BearerToken,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .with_bearer(&state.tokens, &bearer)
        .require(&[])
        .await?;

    let uploaded = store_upload(&state, UploadKind::Screenshot, multipart).await?;

    Ok((StatusCode::OK, Json(uploaded)))
}

/// Upload a livery archive.
///
/// Multipart form with a single `file` field, up to 100 MiB.
///
/// # Access Control
/// - Any logged in user
#[utoipa::path(
    post,
    path = "/api/upload-livery",
    tag = UPLOAD_TAG,
    request_body(content_type = "multipart/form-data", description = "Form with a `file` field"),
    responses(
        (status = 200, description = "Stored file location", body = UploadedFileDto),
        (status = 400, description = "No file provided", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_livery(
    State(state): State<AppState>,
    session: Session,
    bearer: BearerToken,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .with_bearer(&state.tokens, &bearer)
        .require(&[])
        .await?;

    let uploaded = store_upload(&state, UploadKind::Livery, multipart).await?;

    Ok((StatusCode::OK, Json(uploaded)))
}
