use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("database error: {0}")]
    Db(#[from] DbErr),
}

impl ModelError {
    /// The write tripped a unique index (a concurrent insert won the race).
    pub fn is_unique_violation(&self) -> bool {
        match self {
            ModelError::Db(e) => matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))),
            ModelError::Validation(_) => false,
        }
    }
}
