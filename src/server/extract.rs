//! Request extractors whose rejections are reported as `AppError`.
//!
//! Axum's own `Json`, `Path` and `Query` extractors answer malformed input with a
//! plain-text body. Handlers use these wrappers instead so that every 4xx from the API
//! is an `ErrorDto`.

use axum::extract::{FromRequest, FromRequestParts};

use crate::server::error::AppError;

/// JSON request body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path parameters.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// Query string parameters.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);
