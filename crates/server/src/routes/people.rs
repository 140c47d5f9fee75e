//! `/people`: the character resource.
use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use models::character::{self, NewCharacter};
use service::db::character_service;

use crate::{errors::{not_found_message, ApiError}, extract::{JsonBody, Path, Query}, routes::PageQuery, state::ServerState};

#[utoipa::path(
    get, path = "/people", tag = "people",
    params(PageQuery),
    responses((status = 200, description = "All characters", body = [crate::openapi::CharacterDoc]))
)]
pub async fn list(State(state): State<ServerState>, Query(q): Query<PageQuery>) -> Result<Json<Vec<character::Model>>, ApiError> {
    let people = character_service::list_characters(&state.db, q.pagination()).await?;
    info!(count = people.len(), "list people");
    Ok(Json(people))
}

#[utoipa::path(
    get, path = "/people/{id}", tag = "people",
    params(("id" = i32, Path, description = "Character ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CharacterDoc),
        (status = 404, description = "People does not exist yet", body = crate::openapi::MessageDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<character::Model>, ApiError> {
    character_service::get_character(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(not_found_message("character")))
}

#[utoipa::path(
    post, path = "/people", tag = "people",
    request_body = crate::openapi::NewCharacterDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CharacterDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::MessageDoc),
        (status = 409, description = "People already exists", body = crate::openapi::MessageDoc)
    )
)]
pub async fn create(State(state): State<ServerState>, JsonBody(input): JsonBody<NewCharacter>) -> Result<(StatusCode, Json<character::Model>), ApiError> {
    let created = character_service::create_character(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
