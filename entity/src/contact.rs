use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "contact")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// One of `general`, `upload_error`, `copyright` or `feature_request`.
    pub contact_type: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub email: String,
    pub related_livery_id: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub related_livery_info: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
