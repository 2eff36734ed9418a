//! Contact message factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for contact rows.
///
/// Defaults: type `general`, title `Message {id}`, no related livery.
pub struct ContactFactory<'a> {
    db: &'a DatabaseConnection,
    contact_type: String,
    title: String,
    content: String,
    email: String,
    related_livery_id: Option<i32>,
    created_at: DateTime<Utc>,
}

impl<'a> ContactFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            contact_type: "general".to_string(),
            title: format!("Message {}", id),
            content: "Hello from the test suite".to_string(),
            email: format!("sender{}@example.com", id),
            related_livery_id: None,
            created_at: Utc::now(),
        }
    }

    pub fn contact_type(mut self, contact_type: impl Into<String>) -> Self {
        self.contact_type = contact_type.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn related_livery_id(mut self, livery_id: i32) -> Self {
        self.related_livery_id = Some(livery_id);
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::contact::Model, DbErr> {
        entity::contact::ActiveModel {
            contact_type: ActiveValue::Set(self.contact_type),
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            email: ActiveValue::Set(self.email),
            related_livery_id: ActiveValue::Set(self.related_livery_id),
            related_livery_info: ActiveValue::Set(None),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a general contact message.
pub async fn create_contact(db: &DatabaseConnection) -> Result<entity::contact::Model, DbErr> {
    ContactFactory::new(db).build().await
}
