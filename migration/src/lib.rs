pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_user_table;
mod m20260101_000002_create_session_table;
mod m20260101_000003_create_livery_table;
mod m20260101_000004_create_contact_table;
mod m20260102_000005_create_auth_token_table;
mod m20260103_000006_add_livery_status_index;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_user_table::Migration),
            Box::new(m20260101_000002_create_session_table::Migration),
            Box::new(m20260101_000003_create_livery_table::Migration),
            Box::new(m20260101_000004_create_contact_table::Migration),
            Box::new(m20260102_000005_create_auth_token_table::Migration),
            Box::new(m20260103_000006_add_livery_status_index::Migration),
        ]
    }
}
