//! HTTP request handlers.
//!
//! Each handler validates its input, converts DTOs into service parameters, calls the
//! matching service, and wraps the resulting domain model in an `ApiResponse`.

pub mod api;
pub mod group;
pub mod health;
pub mod message;
pub mod player;
