//! Database-specific error types and conversions.

use firmy_core::error::FirmyError;

/// Database-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SurrealDB error: {0}")]
    Surreal(#[from] surrealdb::Error),

    #[error("Schema initialization failed: {0}")]
    Schema(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Malformed record: {0}")]
    Decode(String),

    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },
}

impl From<DbError> for FirmyError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => FirmyError::NotFound { entity, id },
            other => FirmyError::Database(other.to_string()),
        }
    }
}
