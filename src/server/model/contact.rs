use chrono::{DateTime, Utc};

use crate::{
    model::contact::{ContactDto, ContactType, SubmitContactDto},
    server::{error::AppError, util::parse::parse_stored},
};

/// Inquiry submitted through the contact form.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub id: i32,
    pub contact_type: ContactType,
    pub title: String,
    pub content: String,
    pub email: String,
    pub related_livery_id: Option<i32>,
    pub related_livery_info: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Contact {
    pub fn into_dto(self) -> ContactDto {
        ContactDto {
            id: self.id,
            contact_type: self.contact_type,
            title: self.title,
            content: self.content,
            email: self.email,
            related_livery_id: self.related_livery_id,
            related_livery_info: self.related_livery_info,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::contact::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            contact_type: parse_stored("contact.contact_type", &entity.contact_type)?,
            title: entity.title,
            content: entity.content,
            email: entity.email,
            related_livery_id: entity.related_livery_id,
            related_livery_info: entity.related_livery_info,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for storing a contact submission.
///
/// Text fields are trimmed and empty optional fields become `None`.
#[derive(Debug, Clone)]
pub struct CreateContactParams {
    pub contact_type: ContactType,
    pub title: String,
    pub content: String,
    pub email: String,
    pub related_livery_id: Option<i32>,
    pub related_livery_info: Option<String>,
}

impl CreateContactParams {
    pub fn from_dto(dto: SubmitContactDto) -> Self {
        Self {
            contact_type: dto.contact_type,
            title: dto.title.trim().to_string(),
            content: dto.content.trim().to_string(),
            email: dto.email.trim().to_string(),
            related_livery_id: dto.related_livery_id,
            related_livery_info: dto
                .related_livery_info
                .map(|info| info.trim().to_string())
                .filter(|info| !info.is_empty()),
        }
    }
}
