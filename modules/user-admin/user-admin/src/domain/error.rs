//! Domain error types for the user-admin module.

use thiserror::Error;
use user_admin_sdk::UserAdminError;

/// Domain-level errors for user administration operations.
#[derive(Error, Debug)]
pub enum DomainError {
    /// The caller failed the management gate. Deliberately carries no
    /// detail about which rule failed.
    #[error("permission denied")]
    PermissionDenied,

    /// A required request field is missing or empty.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A backing store failed. `code` is the only detail that crosses
    /// the module boundary; `source` stays in the server logs.
    #[error("{code}")]
    Internal {
        code: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl DomainError {
    /// Creates an `InvalidArgument` error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Creates an `Internal` error with a stable operation code.
    #[must_use]
    pub fn internal(code: &'static str, source: anyhow::Error) -> Self {
        Self::Internal { code, source }
    }
}

impl From<DomainError> for UserAdminError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::PermissionDenied => Self::PermissionDenied,
            DomainError::InvalidArgument(message) => Self::InvalidArgument(message),
            // The source never crosses the boundary; it was logged where
            // the failure happened.
            DomainError::Internal { code, .. } => Self::Internal(code.to_owned()),
        }
    }
}
