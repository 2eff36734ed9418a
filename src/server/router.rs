use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{admin, auth, contact, file, livery, upload},
    service::upload::{FILES_ROUTE, MAX_UPLOAD_BYTES},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Livery Hub API", description = "Flight simulator livery sharing"),
    tags(
        (name = "auth", description = "Registration, login and account recovery"),
        (name = "livery", description = "Livery catalog and uploads"),
        (name = "contact", description = "Contact form"),
        (name = "upload", description = "File uploads"),
        (name = "admin", description = "Moderation")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (api_router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(auth::verify_email))
        .routes(routes!(auth::request_password_reset))
        .routes(routes!(auth::reset_password))
        .routes(routes!(livery::list_liveries, livery::create_livery))
        .routes(routes!(
            livery::get_livery,
            livery::update_livery,
            livery::delete_livery
        ))
        .routes(routes!(livery::download_livery))
        .routes(routes!(livery::get_my_liveries))
        .routes(routes!(contact::submit_contact))
        .routes(routes!(admin::get_contacts))
        .routes(routes!(admin::get_pending_liveries))
        .routes(routes!(admin::review_livery))
        .routes(routes!(upload::upload_screenshot))
        .routes(routes!(upload::upload_livery))
        .split_for_parts();

    Router::new()
        .merge(api_router)
        .route(&format!("{}/{{*key}}", FILES_ROUTE), get(file::get_file))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
}
