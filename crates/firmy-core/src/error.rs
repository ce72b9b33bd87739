//! Error types for the Firmy system.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FirmyError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl FirmyError {
    pub fn not_found(entity: &str, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

pub type FirmyResult<T> = Result<T, FirmyError>;

/// Treats a `NotFound` lookup as an absent value.
pub trait OptionalExt<T> {
    /// `Ok(None)` for [`FirmyError::NotFound`]; every other error is kept.
    fn optional(self) -> FirmyResult<Option<T>>;
}

impl<T> OptionalExt<T> for FirmyResult<T> {
    fn optional(self) -> FirmyResult<Option<T>> {
        match self {
            Ok(value) => Ok(Some(value)),
            Err(FirmyError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_becomes_none() {
        let lookup: FirmyResult<u8> = Err(FirmyError::not_found("company", 7));
        assert!(matches!(lookup.optional(), Ok(None)));
    }

    #[test]
    fn other_errors_are_kept() {
        let lookup: FirmyResult<u8> = Err(FirmyError::Database("connection reset".into()));
        assert!(matches!(lookup.optional(), Err(FirmyError::Database(_))));

        let lookup: FirmyResult<u8> = Err(FirmyError::validation("bad"));
        assert!(matches!(lookup.optional(), Err(FirmyError::Validation { .. })));
    }

    #[test]
    fn values_are_wrapped() {
        assert!(matches!(Ok::<_, FirmyError>(3u8).optional(), Ok(Some(3))));
    }
}
