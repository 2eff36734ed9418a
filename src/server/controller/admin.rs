use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        contact::ContactDto,
        livery::{LiveryDto, ReviewDecisionDto},
    },
    server::{
        controller::param::LimitParam,
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken, Permission},
        model::livery::ReviewVerdict,
        service::{contact::ContactService, livery::LiveryService},
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// List contact form submissions, newest first.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/contacts",
    tag = ADMIN_TAG,
    params(LimitParam),
    responses(
        (status = 200, description = "Contact submissions", body = Vec<ContactDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_contacts(
    State(state): State<AppState>,
    session: Session,
    bearer: BearerToken,
    Query(params): Query<LimitParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .with_bearer(&state.tokens, &bearer)
        .require(&[Permission::Admin])
        .await?;

    let contacts = ContactService::new(&state.db).list(params.limit).await?;
    let dtos: Vec<ContactDto> = contacts.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// List liveries waiting for review, oldest first.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/liveries/pending",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Pending liveries", body = Vec<LiveryDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pending_liveries(
    State(state): State<AppState>,
    session: Session,
    bearer: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .with_bearer(&state.tokens, &bearer)
        .require(&[Permission::Admin])
        .await?;

    let liveries = LiveryService::new(&state.db).get_pending().await?;
    let dtos: Vec<LiveryDto> = liveries.into_iter().map(|l| l.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Approve or reject a livery by hand.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/admin/liveries/{livery_id}/review",
    tag = ADMIN_TAG,
    params(
        ("livery_id" = i32, Path, description = "Livery ID")
    ),
    request_body = ReviewDecisionDto,
    responses(
        (status = 200, description = "Verdict recorded", body = LiveryDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Livery not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn review_livery(
    State(state): State<AppState>,
    session: Session,
    bearer: BearerToken,
    Path(livery_id): Path<i32>,
    Json(payload): Json<ReviewDecisionDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .with_bearer(&state.tokens, &bearer)
        .require(&[Permission::Admin])
        .await?;

    let verdict = ReviewVerdict {
        approved: payload.approved,
        notes: payload.notes.trim().to_string(),
    };
    let livery = LiveryService::new(&state.db)
        .review(livery_id, verdict)
        .await?;

    tracing::info!(
        "Admin {} set livery {} to {}",
        admin.id,
        livery.id,
        livery.status
    );

    Ok((StatusCode::OK, Json(livery.into_dto())))
}
