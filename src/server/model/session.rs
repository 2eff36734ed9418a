use chrono::{DateTime, Utc};

/// Server-side login session referenced by the session cookie and the JWT `sid` claim.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: i32,
    pub user_id: i32,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }

    pub fn from_entity(entity: entity::session::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            token: entity.token,
            expires_at: entity.expires_at,
        }
    }
}
