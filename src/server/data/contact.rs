use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect,
};

use crate::server::{
    error::AppError,
    model::contact::{Contact, CreateContactParams},
};

pub struct ContactRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContactRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateContactParams) -> Result<Contact, AppError> {
        let entity = entity::contact::ActiveModel {
            contact_type: ActiveValue::Set(params.contact_type.as_str().to_string()),
            title: ActiveValue::Set(params.title),
            content: ActiveValue::Set(params.content),
            email: ActiveValue::Set(params.email),
            related_livery_id: ActiveValue::Set(params.related_livery_id),
            related_livery_info: ActiveValue::Set(params.related_livery_info),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Contact::from_entity(entity)
    }

    /// Lists submissions newest first, optionally capped at `limit` rows.
    pub async fn list(&self, limit: Option<u64>) -> Result<Vec<Contact>, AppError> {
        let entities = entity::prelude::Contact::find()
            .order_by_desc(entity::contact::Column::CreatedAt)
            .order_by_desc(entity::contact::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        entities.into_iter().map(Contact::from_entity).collect()
    }
}
