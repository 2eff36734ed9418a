use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
};

use crate::server::{error::AppError, state::AppState};

/// Serve a stored upload.
///
/// Content type is derived from the key's extension.
pub async fn get_file(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (data, content_type) = state.storage.get(&key).await?;

    Ok((StatusCode::OK, [(header::CONTENT_TYPE, content_type)], data))
}
