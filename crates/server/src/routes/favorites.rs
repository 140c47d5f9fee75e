use axum::{extract::State, Json};
use tracing::info;

use common::types::MessageBody;
use models::favorite;
use service::{db::favorite_service, FavoriteTarget};

use crate::{errors::ApiError, extract::Path, state::ServerState};

#[utoipa::path(
    get, path = "/user/favorites/{user_id}", tag = "favorites",
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Favorites of the user, possibly empty", body = [crate::openapi::FavoriteDoc]),
        (status = 404, description = "User does not exist yet", body = crate::openapi::MessageDoc)
    )
)]
pub async fn list_for_user(State(state): State<ServerState>, Path(user_id): Path<i32>) -> Result<Json<Vec<favorite::Model>>, ApiError> {
    let favs = favorite_service::list_user_favorites(&state.db, user_id).await?;
    info!(user_id, count = favs.len(), "list favorites");
    Ok(Json(favs))
}

#[utoipa::path(
    post, path = "/favorites/planets/{planet_id}/{user_id}", tag = "favorites",
    params(
        ("planet_id" = i32, Path, description = "Planet ID"),
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The favorite was added", body = crate::openapi::MessageDoc),
        (status = 404, description = "User or planet does not exist", body = crate::openapi::MessageDoc),
        (status = 409, description = "This favorite already exist", body = crate::openapi::MessageDoc),
        (status = 500, description = "Database error", body = crate::openapi::MessageDoc)
    )
)]
pub async fn add_planet(State(state): State<ServerState>, Path((planet_id, user_id)): Path<(i32, i32)>) -> Result<Json<MessageBody>, ApiError> {
    favorite_service::add_favorite(&state.db, user_id, FavoriteTarget::Planet(planet_id)).await?;
    Ok(Json(MessageBody::new("The favorite was added")))
}

#[utoipa::path(
    post, path = "/favorites/people/{people_id}/{user_id}", tag = "favorites",
    params(
        ("people_id" = i32, Path, description = "Character ID"),
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Favorite was added", body = crate::openapi::MessageDoc),
        (status = 404, description = "User or character does not exist", body = crate::openapi::MessageDoc),
        (status = 409, description = "This favorite already exist", body = crate::openapi::MessageDoc),
        (status = 500, description = "Database error", body = crate::openapi::MessageDoc)
    )
)]
pub async fn add_people(State(state): State<ServerState>, Path((people_id, user_id)): Path<(i32, i32)>) -> Result<Json<MessageBody>, ApiError> {
    favorite_service::add_favorite(&state.db, user_id, FavoriteTarget::Character(people_id)).await?;
    Ok(Json(MessageBody::new("Favorite was added")))
}

#[utoipa::path(
    delete, path = "/favorites/planets/{planet_id}/{user_id}", tag = "favorites",
    params(
        ("planet_id" = i32, Path, description = "Planet ID"),
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "This favorite was deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Favorite does not exist", body = crate::openapi::MessageDoc)
    )
)]
pub async fn delete_planet(State(state): State<ServerState>, Path((planet_id, user_id)): Path<(i32, i32)>) -> Result<Json<MessageBody>, ApiError> {
    favorite_service::remove_favorite(&state.db, user_id, FavoriteTarget::Planet(planet_id)).await?;
    Ok(Json(MessageBody::new("This favorite was deleted")))
}

#[utoipa::path(
    delete, path = "/favorites/people/{people_id}/{user_id}", tag = "favorites",
    params(
        ("people_id" = i32, Path, description = "Character ID"),
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "This favorite was deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Favorite does not exist", body = crate::openapi::MessageDoc)
    )
)]
pub async fn delete_people(State(state): State<ServerState>, Path((people_id, user_id)): Path<(i32, i32)>) -> Result<Json<MessageBody>, ApiError> {
    favorite_service::remove_favorite(&state.db, user_id, FavoriteTarget::Character(people_id)).await?;
    Ok(Json(MessageBody::new("This favorite was deleted")))
}
