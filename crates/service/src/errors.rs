use models::errors::ModelError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Carries the entity name (`user`, `planet`, `character`, `favorite`).
    #[error("{0} not found")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(#[from] DbErr),
    #[error("model error: {0}")]
    Model(#[from] ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(entity.to_string()) }

    /// An insert that lost a race against an identical one hits the unique
    /// index after the existence check passed; report it like the check would.
    pub(crate) fn on_insert(e: ModelError, conflict: &str) -> Self {
        if e.is_unique_violation() {
            Self::Conflict(conflict.to_string())
        } else {
            Self::Model(e)
        }
    }
}
