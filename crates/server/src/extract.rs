//! Request extractors whose rejections render as `{"Message": ...}`.
//!
//! Drop-in for axum's `Json`, `Path` and `Query` on the input side; handlers
//! still answer with `axum::Json`.

use axum::extract::{FromRequest, FromRequestParts};

use crate::errors::ApiError;

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct Path<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct Query<T>(pub T);
