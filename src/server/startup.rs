use std::{sync::Arc, time::Duration as StdDuration};

use object_store::local::LocalFileSystem;
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::AppError,
    service::{auth::token::SESSION_LIFETIME_DAYS, upload::FileStorage},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Opens the tower-sessions store in the application database and creates its table.
pub async fn connect_to_session_store(db: &DatabaseConnection) -> Result<SqliteStore, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to migrate session store: {}", e)))?;

    Ok(session_store)
}

/// Creates the cookie session layer.
///
/// Sessions expire after seven days of inactivity. Cookies are marked `Secure` when the
/// app is served over https.
pub fn session_layer(
    session_store: SqliteStore,
    config: &Config,
) -> SessionManagerLayer<SqliteStore> {
    SessionManagerLayer::new(session_store)
        .with_secure(config.secure_cookies())
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(SESSION_LIFETIME_DAYS)))
}

/// Builds the outbound HTTP client.
///
/// Redirects are disabled and requests time out so a slow review model cannot stall the
/// scheduler indefinitely.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(StdDuration::from_secs(60))
        .build()?;

    Ok(client)
}

/// Opens the local filesystem store under `STORAGE_DIR`, creating the directory if needed.
pub fn setup_storage(config: &Config) -> Result<FileStorage, AppError> {
    std::fs::create_dir_all(&config.storage_dir).map_err(|e| {
        AppError::InternalError(format!(
            "Failed to create storage directory {}: {}",
            config.storage_dir, e
        ))
    })?;

    let store = LocalFileSystem::new_with_prefix(&config.storage_dir)?;

    Ok(FileStorage::new(Arc::new(store), &config.app_url))
}
