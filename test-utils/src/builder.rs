use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for test contexts with a chosen set of entity tables.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Livery, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Livery)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// CREATE TABLE statements, executed in insertion order by `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds the table for `entity` using SQLite syntax.
    ///
    /// Tables are created from the entity definitions rather than the migrations, so column
    /// defaults declared only in migrations are absent. Add referenced tables first.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables used by registration, login and the auth guard:
    /// User, Session and AuthToken.
    pub fn with_auth_tables(self) -> Self {
        self.with_table(User)
            .with_table(Session)
            .with_table(AuthToken)
    }

    /// Adds User and Livery.
    pub fn with_livery_tables(self) -> Self {
        self.with_table(User).with_table(Livery)
    }

    /// Adds every application table.
    pub fn with_all_tables(self) -> Self {
        self.with_auth_tables()
            .with_table(Livery)
            .with_table(Contact)
    }

    /// Connects to a fresh in-memory database and creates the configured tables.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
