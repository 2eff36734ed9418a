use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "livery")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub manufacturer: String,
    pub aircraft: String,
    pub brand: String,
    pub livery_name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub msfs_version: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub install_method: Option<String>,
    /// JSON array of screenshot URLs.
    #[sea_orm(column_type = "Text", nullable)]
    pub screenshots: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub file_url: String,
    #[sea_orm(column_type = "Text")]
    pub file_key: String,
    pub file_name: Option<String>,
    pub file_size: Option<i64>,
    pub download_count: i32,
    /// One of `pending`, `approved` or `rejected`.
    pub status: String,
    pub reviewed_at: Option<DateTimeUtc>,
    #[sea_orm(column_type = "Text", nullable)]
    pub review_notes: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
