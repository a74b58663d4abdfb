//! Domain error to RFC 9457 problem mapping.

use axum::response::{IntoResponse, Response};
use http::StatusCode;
use http_problem::Problem;

use crate::domain::error::DomainError;

/// Handler result type; `?` on a domain error produces a problem
/// response.
pub type ApiResult<T> = Result<T, ApiError>;

/// Wrapper making [`DomainError`] usable as an axum response.
pub struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        Self(e)
    }
}

/// Maps a domain error to a problem carrying only the stable machine
/// code and a short human message; collaborator detail never crosses
/// this boundary (it was already logged where the failure happened).
pub fn domain_error_to_problem(e: &DomainError) -> Problem {
    match e {
        DomainError::PermissionDenied => {
            Problem::new(StatusCode::FORBIDDEN, "Permission Denied", "Admins only")
                .with_code("permission-denied")
        }
        DomainError::InvalidArgument(message) => {
            Problem::new(StatusCode::BAD_REQUEST, "Invalid Argument", message.clone())
                .with_code("invalid-argument")
        }
        DomainError::Internal { code, .. } => Problem::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Error",
            *code,
        )
        .with_code("internal"),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        domain_error_to_problem(&self.0).into_response()
    }
}
