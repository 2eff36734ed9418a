//! LiveryHub Test Utils
//!
//! Shared helpers for the server's repository, service and middleware tests. Every test gets its
//! own in-memory SQLite database with only the tables it asks for.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for choosing which entity tables to create
//! - **TestContext**: Holds the database connection and a lazily created session
//! - **TestError**: Errors that can occur while setting up the context
//! - **factory**: Builders that insert users, sessions, liveries and contacts with defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_liveries() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_livery_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let user = factory::create_user(db).await?;
//!     let livery = factory::create_livery(db, user.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
