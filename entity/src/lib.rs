//! SeaORM entity models for the livery database.

pub mod prelude;

pub mod auth_token;
pub mod contact;
pub mod livery;
pub mod session;
pub mod user;
