//! Data transfer objects shared by the client and the server.
//!
//! Everything in here compiles for both the web target and the server. Server-only
//! derives (OpenAPI schemas) are gated behind the `server` feature.

pub mod aircraft;
pub mod api;
pub mod contact;
pub mod livery;
pub mod upload;
pub mod user;
