use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Livery::Table)
                    .if_not_exists()
                    .col(pk_auto(Livery::Id))
                    .col(integer(Livery::UserId))
                    .col(string_len(Livery::Manufacturer, 16))
                    .col(string_len(Livery::Aircraft, 64))
                    .col(string_len(Livery::Brand, 128))
                    .col(string_len(Livery::LiveryName, 256))
                    .col(text_null(Livery::Description))
                    .col(string_len_null(Livery::MsfsVersion, 8))
                    .col(text_null(Livery::InstallMethod))
                    .col(text_null(Livery::Screenshots))
                    .col(text(Livery::FileUrl))
                    .col(text(Livery::FileKey))
                    .col(string_len_null(Livery::FileName, 256))
                    .col(big_integer_null(Livery::FileSize))
                    .col(integer(Livery::DownloadCount).default(0))
                    .col(string_len(Livery::Status, 16).default("pending"))
                    .col(timestamp_null(Livery::ReviewedAt))
                    .col(text_null(Livery::ReviewNotes))
                    .col(timestamp(Livery::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Livery::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_livery_user_id")
                            .from(Livery::Table, Livery::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Livery::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Livery {
    Table,
    Id,
    UserId,
    Manufacturer,
    Aircraft,
    Brand,
    LiveryName,
    Description,
    MsfsVersion,
    InstallMethod,
    Screenshots,
    FileUrl,
    FileKey,
    FileName,
    FileSize,
    DownloadCount,
    Status,
    ReviewedAt,
    ReviewNotes,
    CreatedAt,
    UpdatedAt,
}
