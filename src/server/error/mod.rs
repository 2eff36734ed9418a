//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, internal::InternalError},
};

/// Error returned by every handler, service and repository in the server.
///
/// Infrastructure failures convert in with `?` and surface as a logged 500. The
/// message-carrying variants are raised by services to report a problem with the request.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Responds with the status chosen by `AuthError` (401 or 403).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    #[error(transparent)]
    InternalErr(#[from] InternalError),

    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Request to the review model endpoint failed.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Uploaded file storage failed; a missing object maps to 404.
    #[error(transparent)]
    StorageErr(#[from] object_store::Error),

    #[error(transparent)]
    JwtErr(#[from] jsonwebtoken::errors::Error),

    /// Unreadable multipart upload body, reported as 400.
    #[error(transparent)]
    MultipartErr(#[from] axum::extract::multipart::MultipartError),

    /// 404 with the given message.
    #[error("{0}")]
    NotFound(String),

    /// 400 with the given message, used for validation failures.
    #[error("{0}")]
    BadRequest(String),

    /// 403 for authenticated callers touching someone else's livery.
    #[error("{0}")]
    Forbidden(String),

    /// Logged in full; the client only sees "Internal server error".
    #[error("{0}")]
    InternalError(String),
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorDto { error })).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            Self::Forbidden(msg) => error_response(StatusCode::FORBIDDEN, msg),
            Self::MultipartErr(err) => error_response(StatusCode::BAD_REQUEST, err.body_text()),
            Self::StorageErr(object_store::Error::NotFound { .. }) => {
                error_response(StatusCode::NOT_FOUND, "File not found".to_string())
            }
            Self::InternalError(msg) => InternalServerError(msg).into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Logs the wrapped error and answers 500 without leaking its details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    }
}
