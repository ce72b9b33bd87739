//! HTTP error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use firmy_core::error::FirmyError;
use firmy_validation::ValidationResult;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The id chain in the path does not describe a real path through the
    /// hierarchy.
    #[error("{0}")]
    Hierarchy(ValidationResult),

    /// The proposed leader is not an employee of the company.
    #[error("{0}")]
    Leader(ValidationResult),

    #[error(transparent)]
    Firmy(#[from] FirmyError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Hierarchy(_) => StatusCode::NOT_FOUND,
            Self::Leader(_) => StatusCode::BAD_REQUEST,
            Self::Firmy(FirmyError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Firmy(FirmyError::Validation { .. }) => StatusCode::BAD_REQUEST,
            Self::Firmy(FirmyError::Database(_) | FirmyError::Internal(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Hierarchy(outcome) | Self::Leader(outcome) => outcome.as_str().to_owned(),
            Self::Firmy(FirmyError::Validation { message }) => message,
            Self::Firmy(e @ FirmyError::NotFound { .. }) => e.to_string(),
            Self::Firmy(e) => {
                error!(error = %e, "request failed");
                "Internal server error".to_owned()
            }
        };
        (status, body).into_response()
    }
}

/// Turns a non-success chain outcome into a 404.
pub(crate) fn check_hierarchy(outcome: ValidationResult) -> Result<(), ApiError> {
    outcome.into_result().map_err(ApiError::Hierarchy)
}

/// Turns a non-success leader outcome into a 400.
pub(crate) fn check_leader(outcome: ValidationResult) -> Result<(), ApiError> {
    outcome.into_result().map_err(ApiError::Leader)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hierarchy_failures_are_not_found() {
        let err = check_hierarchy(ValidationResult::DivisionNotInCompany).unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "DivisionNotInCompany");
    }

    #[test]
    fn leader_failures_are_bad_request() {
        let err = check_leader(ValidationResult::InvalidLeader).unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn success_passes() {
        assert!(check_hierarchy(ValidationResult::Success).is_ok());
        assert!(check_leader(ValidationResult::Success).is_ok());
    }

    #[test]
    fn firmy_errors_map_to_status() {
        let cases = [
            (FirmyError::not_found("company", "x"), StatusCode::NOT_FOUND),
            (FirmyError::validation("name is required"), StatusCode::BAD_REQUEST),
            (FirmyError::Database("down".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (FirmyError::Internal("bug".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
    }
}
