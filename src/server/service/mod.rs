//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Rank resolution, reference checks before deleting groups,
//!   uniqueness checks and message placeholder substitution
//! - **Orchestration**: Coordinating multiple repository calls per request
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Error Mapping**: Turning missing records and conflicts into `AppError` variants

pub mod group;
pub mod message;
pub mod player;
pub mod schema;
