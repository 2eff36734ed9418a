//! HTTP request handlers.
//!
//! Controllers authenticate the caller, convert DTOs into domain parameters, call the
//! service layer and map the result back into DTO responses.

pub mod admin;
pub mod auth;
pub mod contact;
pub mod file;
pub mod livery;
pub mod param;
pub mod upload;
