use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::MessageBody;
use models::errors::ModelError;
use service::errors::ServiceError;
use tracing::error;

/// Error reply rendered as `{"Message": ...}` with the given status.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}

/// Body sent for any storage failure; the detail only goes to the log.
pub const DB_ERROR_MESSAGE: &str = "Database error";

/// Client-facing wording for a missing entity.
pub fn not_found_message(entity: &str) -> String {
    match entity {
        "user" => "User does not exist yet".into(),
        "character" => "People does not exist yet".into(),
        "planet" => "Planet does not exist yet".into(),
        "favorite" => "Favorite does not exist".into(),
        other => format!("{other} does not exist"),
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Model(ModelError::Validation(msg)) => Self::new(StatusCode::BAD_REQUEST, msg),
            ServiceError::NotFound(entity) => Self::not_found(not_found_message(&entity)),
            ServiceError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
            ServiceError::Db(err) | ServiceError::Model(ModelError::Db(err)) => {
                error!(error = %err, "database failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, DB_ERROR_MESSAGE)
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(r: JsonRejection) -> Self {
        // wrong content type stays 415; anything wrong with the body itself is 400
        let status = match r {
            JsonRejection::MissingJsonContentType(_) => r.status(),
            _ => StatusCode::BAD_REQUEST,
        };
        Self::new(status, r.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(r: PathRejection) -> Self {
        let status = if r.status().is_server_error() { r.status() } else { StatusCode::BAD_REQUEST };
        Self::new(status, r.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(r: QueryRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, r.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(MessageBody::new(self.message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::DbErr;

    #[test]
    fn service_errors_map_to_status_codes() {
        let cases = [
            (ServiceError::Model(ModelError::Validation("bad".into())), StatusCode::BAD_REQUEST),
            (ServiceError::not_found("planet"), StatusCode::NOT_FOUND),
            (ServiceError::Conflict("dup".into()), StatusCode::CONFLICT),
            (ServiceError::Db(DbErr::Custom("down".into())), StatusCode::INTERNAL_SERVER_ERROR),
            (ServiceError::Model(ModelError::Db(DbErr::Custom("down".into()))), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status, status);
        }
    }

    #[test]
    fn not_found_uses_entity_wording() {
        assert_eq!(ApiError::from(ServiceError::not_found("user")).message, "User does not exist yet");
        assert_eq!(ApiError::from(ServiceError::not_found("character")).message, "People does not exist yet");
        assert_eq!(ApiError::from(ServiceError::not_found("favorite")).message, "Favorite does not exist");
    }

    #[test]
    fn db_failures_hide_the_driver_message() {
        let err = ApiError::from(ServiceError::Db(DbErr::Custom("no such table: favorite".into())));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, DB_ERROR_MESSAGE);
    }
}
