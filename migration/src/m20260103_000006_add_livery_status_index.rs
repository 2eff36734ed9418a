use sea_orm_migration::prelude::*;

use super::m20260101_000003_create_livery_table::Livery;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_livery_status_created_at")
                    .table(Livery::Table)
                    .col(Livery::Status)
                    .col(Livery::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_livery_user_id")
                    .table(Livery::Table)
                    .col(Livery::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_livery_user_id")
                    .table(Livery::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_livery_status_created_at")
                    .table(Livery::Table)
                    .to_owned(),
            )
            .await
    }
}
