//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into every handler through
//! Axum's state extraction. All fields are cheap to clone: the database handle is a
//! pool, `reqwest::Client` and the object store are reference counted, and the token
//! service only holds the derived signing keys.

use sea_orm::DatabaseConnection;

use super::service::{auth::token::TokenService, upload::FileStorage};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for outbound requests (the review model endpoint).
    ///
    /// Configured without redirects and with a request timeout.
    pub http_client: reqwest::Client,

    /// Signs and verifies the JWTs handed out at login.
    pub tokens: TokenService,

    /// Storage for uploaded screenshots and livery archives.
    pub storage: FileStorage,

    /// Application base URL without trailing slash.
    pub app_url: String,

    /// Email address that is granted the admin role on registration.
    pub admin_email: Option<String>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        tokens: TokenService,
        storage: FileStorage,
        app_url: String,
        admin_email: Option<String>,
    ) -> Self {
        Self {
            db,
            http_client,
            tokens,
            storage,
            app_url,
            admin_email,
        }
    }
}
