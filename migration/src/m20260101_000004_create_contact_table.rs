use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contact::Table)
                    .if_not_exists()
                    .col(pk_auto(Contact::Id))
                    .col(string_len(Contact::ContactType, 32))
                    .col(string_len(Contact::Title, 256))
                    .col(text(Contact::Content))
                    .col(string_len(Contact::Email, 320))
                    .col(integer_null(Contact::RelatedLiveryId))
                    .col(text_null(Contact::RelatedLiveryInfo))
                    .col(timestamp(Contact::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Contact::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Contact {
    Table,
    Id,
    ContactType,
    Title,
    Content,
    Email,
    RelatedLiveryId,
    RelatedLiveryInfo,
    CreatedAt,
}
