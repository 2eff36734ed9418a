use thiserror::Error;

/// Errors raised while preparing a [`crate::context::TestContext`].
#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
    #[error("Failed to prepare session store: {0}")]
    Session(String),
}
