use sea_orm::DatabaseConnection;

use crate::server::{
    data::contact::ContactRepository,
    error::AppError,
    model::contact::{Contact, CreateContactParams},
    util::validate::{require_email, require_len},
};

pub const MAX_CONTENT_LEN: usize = 10_000;

pub struct ContactService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContactService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and stores a contact form submission.
    pub async fn submit(&self, params: CreateContactParams) -> Result<Contact, AppError> {
        require_len("Title", &params.title, 1, 256)?;
        require_len("Content", &params.content, 1, MAX_CONTENT_LEN)?;
        require_email(&params.email)?;

        ContactRepository::new(self.db).create(params).await
    }

    pub async fn list(&self, limit: Option<u64>) -> Result<Vec<Contact>, AppError> {
        ContactRepository::new(self.db).list(limit).await
    }
}
