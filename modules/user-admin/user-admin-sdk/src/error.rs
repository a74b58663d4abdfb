//! Public error type for the `user-admin` module.

use thiserror::Error;

/// Errors surfaced across the module boundary.
///
/// Collaborator-store detail never appears here: `Internal` carries only
/// the stable per-operation code (`create-failed`, `update-failed`,
/// `delete-failed`, `list-failed`); everything else stays in the server
/// logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserAdminError {
    /// The caller is not allowed to manage users.
    #[error("permission denied")]
    PermissionDenied,

    /// The request payload is missing a required field.
    #[error("{0}")]
    InvalidArgument(String),

    /// A backing store failed; the message is an opaque operation code.
    #[error("{0}")]
    Internal(String),
}

impl UserAdminError {
    /// Creates an `InvalidArgument` error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Creates an `Internal` error from an opaque operation code.
    #[must_use]
    pub fn internal(code: impl Into<String>) -> Self {
        Self::Internal(code.into())
    }

    /// Stable machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::PermissionDenied => "permission-denied",
            Self::InvalidArgument(_) => "invalid-argument",
            Self::Internal(_) => "internal",
        }
    }

    /// Returns `true` if this is a `PermissionDenied` error.
    #[must_use]
    pub const fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied)
    }

    /// Returns `true` if this is an `InvalidArgument` error.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Returns `true` if this is an `Internal` error.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal(_))
    }
}
