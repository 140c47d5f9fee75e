use axum::{
    extract::Request,
    http::Uri,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tower::{util::{MapRequest, MapRequestLayer}, Layer};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::{observability, types::Health};
use service::pagination::Pagination;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod users;
pub mod people;
pub mod planets;
pub mod favorites;
pub mod sitemap;

/// Optional `?page=&per_page=`; without either the full list is returned.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page index
    pub page: Option<u32>,
    /// Items per page (1..=100)
    pub per_page: Option<u32>,
}

impl PageQuery {
    pub fn pagination(&self) -> Option<Pagination> {
        Pagination::from_query(self.page, self.per_page)
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn metrics() -> (axum::http::StatusCode, String) {
    observability::encode_metrics()
}

async fn track_requests(req: Request, next: Next) -> Response {
    let method = req.method().to_string();
    let res = next.run(req).await;
    observability::HTTP_REQUESTS_TOTAL
        .with_label_values(&[method.as_str(), res.status().as_str()])
        .inc();
    res
}

/// Build the full application router: sitemap, resources, favorites and docs.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let resources: Router<ServerState> = Router::new()
        .route("/users", get(users::list).post(users::create))
        .route("/users/:id", get(users::get))
        .route("/people", get(people::list).post(people::create))
        .route("/people/:id", get(people::get))
        .route("/planets", get(planets::list).post(planets::create))
        .route("/planets/:id", get(planets::get));

    let favorite_routes: Router<ServerState> = Router::new()
        .route("/user/favorites/:user_id", get(favorites::list_for_user))
        .route(
            "/favorites/planets/:planet_id/:user_id",
            post(favorites::add_planet).delete(favorites::delete_planet),
        )
        .route(
            "/favorites/people/:people_id/:user_id",
            post(favorites::add_people).delete(favorites::delete_people),
        );

    Router::new()
        .route("/", get(sitemap::sitemap))
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .merge(resources)
        .merge(favorite_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(middleware::from_fn(track_requests))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}

/// The router behind trailing-slash normalization.
pub type AppService = MapRequest<Router, fn(Request) -> Request>;

/// `/users/` routes like `/users`. Swagger UI under `/docs` keeps its slash:
/// it redirects `/docs` to `/docs/` itself.
pub fn trim_trailing_slash(mut req: Request) -> Request {
    let path = req.uri().path();
    if path.len() <= 1 || !path.ends_with('/') || path.starts_with("/docs") {
        return req;
    }
    let trimmed = match path.trim_end_matches('/') {
        "" => "/",
        p => p,
    };
    let path_and_query = match req.uri().query() {
        Some(q) => format!("{trimmed}?{q}"),
        None => trimmed.to_string(),
    };
    let mut parts = req.uri().clone().into_parts();
    if let Ok(pq) = path_and_query.parse() {
        parts.path_and_query = Some(pq);
        if let Ok(uri) = Uri::from_parts(parts) {
            *req.uri_mut() = uri;
        }
    }
    req
}

/// Router wrapped so that `/users/` and `/users` route the same.
pub fn build_service(state: ServerState, cors: CorsLayer) -> AppService {
    MapRequestLayer::new(trim_trailing_slash as fn(Request) -> Request).layer(build_router(state, cors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn path_after(uri: &str) -> String {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        trim_trailing_slash(req).uri().to_string()
    }

    #[test]
    fn trims_trailing_slashes() {
        assert_eq!(path_after("/users/"), "/users");
        assert_eq!(path_after("/planets/3//"), "/planets/3");
        assert_eq!(path_after("/users/?page=2"), "/users?page=2");
    }

    #[test]
    fn leaves_root_and_docs_alone() {
        assert_eq!(path_after("/"), "/");
        assert_eq!(path_after("/docs/"), "/docs/");
        assert_eq!(path_after("/people"), "/people");
    }

    #[test]
    fn page_query_is_optional() {
        assert!(PageQuery::default().pagination().is_none());
        let p = PageQuery { page: Some(3), per_page: None }.pagination().unwrap();
        assert_eq!((p.page, p.per_page), (3, 20));
    }
}
