//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing validation and access rules
//! - **Orchestration**: Coordinating repository calls, object storage and the review model
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod auth;
pub mod contact;
pub mod livery;
pub mod maintenance;
pub mod review;
pub mod upload;

#[cfg(test)]
mod test;
