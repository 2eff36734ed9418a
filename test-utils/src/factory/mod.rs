//! Factories that insert test rows with sensible defaults.
//!
//! Each entity has a `*Factory` builder for customization and a `create_*` shorthand for the
//! default case. Unique columns such as usernames, emails and tokens are derived from
//! [`helpers::next_id`] so repeated calls never collide.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let admin = factory::user::UserFactory::new(&db).admin(true).build().await?;
//! let livery = factory::livery::LiveryFactory::new(&db, admin.id)
//!     .aircraft("A350-900")
//!     .brand("iniBuilds")
//!     .approved()
//!     .build()
//!     .await?;
//! ```

pub mod auth_token;
pub mod contact;
pub mod helpers;
pub mod livery;
pub mod session;
pub mod user;

pub use auth_token::create_auth_token;
pub use contact::create_contact;
pub use livery::create_livery;
pub use session::create_session;
pub use user::create_user;
