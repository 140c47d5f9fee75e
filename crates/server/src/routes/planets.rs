use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use models::planet::{self, NewPlanet};
use service::db::planet_service;

use crate::{errors::{not_found_message, ApiError}, extract::{JsonBody, Path, Query}, routes::PageQuery, state::ServerState};

#[utoipa::path(
    get, path = "/planets", tag = "planets",
    params(PageQuery),
    responses((status = 200, description = "All planets", body = [crate::openapi::PlanetDoc]))
)]
pub async fn list(State(state): State<ServerState>, Query(q): Query<PageQuery>) -> Result<Json<Vec<planet::Model>>, ApiError> {
    let planets = planet_service::list_planets(&state.db, q.pagination()).await?;
    info!(count = planets.len(), "list planets");
    Ok(Json(planets))
}

#[utoipa::path(
    get, path = "/planets/{id}", tag = "planets",
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::PlanetDoc),
        (status = 404, description = "Planet does not exist yet", body = crate::openapi::MessageDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<planet::Model>, ApiError> {
    planet_service::get_planet(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(not_found_message("planet")))
}

#[utoipa::path(
    post, path = "/planets", tag = "planets",
    request_body = crate::openapi::NewPlanetDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::PlanetDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::MessageDoc),
        (status = 409, description = "Planet already exists", body = crate::openapi::MessageDoc)
    )
)]
pub async fn create(State(state): State<ServerState>, JsonBody(input): JsonBody<NewPlanet>) -> Result<(StatusCode, Json<planet::Model>), ApiError> {
    let created = planet_service::create_planet(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
