use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use tracing::info;

use models::user;
use service::db::user_service;

use crate::{errors::{not_found_message, ApiError}, extract::{JsonBody, Path, Query}, routes::PageQuery, state::ServerState};

#[derive(Debug, Deserialize)]
pub struct CreateUserInput {
    pub email: String,
    pub password: String,
}

#[utoipa::path(
    get, path = "/users", tag = "users",
    params(PageQuery),
    responses((status = 200, description = "All users", body = [crate::openapi::UserDoc]))
)]
pub async fn list(State(state): State<ServerState>, Query(q): Query<PageQuery>) -> Result<Json<Vec<user::Model>>, ApiError> {
    let users = user_service::list_users(&state.db, q.pagination()).await?;
    info!(count = users.len(), "list users");
    Ok(Json(users))
}

#[utoipa::path(
    get, path = "/users/{id}", tag = "users",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::UserDoc),
        (status = 404, description = "User does not exist yet", body = crate::openapi::MessageDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<user::Model>, ApiError> {
    match user_service::get_user(&state.db, id).await? {
        Some(u) => Ok(Json(u)),
        None => Err(ApiError::not_found(not_found_message("user"))),
    }
}

#[utoipa::path(
    post, path = "/users", tag = "users",
    request_body = crate::openapi::CreateUserDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::UserDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::MessageDoc),
        (status = 409, description = "User already exists", body = crate::openapi::MessageDoc)
    )
)]
pub async fn create(State(state): State<ServerState>, JsonBody(input): JsonBody<CreateUserInput>) -> Result<(StatusCode, Json<user::Model>), ApiError> {
    let created = user_service::create_user(&state.db, &input.email, &input.password).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
