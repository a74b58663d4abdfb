//! `UserAdminApi` trait definition.
//!
//! This trait defines the public API for the `user-admin` module. All
//! methods take a [`CallerContext`] and are gated before any backing
//! store is touched.

use async_trait::async_trait;

use crate::context::CallerContext;
use crate::error::UserAdminError;
use crate::models::{CreatedUser, NewUser, UserRecord, UserUpdate};

/// Public API trait for the `user-admin` module.
///
/// Consumers hold the client behind this trait rather than a concrete
/// service type:
/// ```ignore
/// let client: Arc<dyn UserAdminApi> = make_client();
/// let created = client.create_user(&ctx, new_user).await?;
/// ```
#[async_trait]
pub trait UserAdminApi: Send + Sync {
    /// Creates an identity record and its profile document, in that
    /// order, and returns the new id.
    ///
    /// # Errors
    ///
    /// * `PermissionDenied` - the caller failed the management gate
    /// * `InvalidArgument` - email or password missing
    /// * `Internal` (`create-failed`) - either backing store failed
    async fn create_user(
        &self,
        ctx: &CallerContext,
        new_user: NewUser,
    ) -> Result<CreatedUser, UserAdminError>;

    /// Applies a partial credential update and re-normalizes the profile
    /// document for `id`.
    ///
    /// # Errors
    ///
    /// * `PermissionDenied` - the caller failed the management gate
    /// * `InvalidArgument` - `id` is empty
    /// * `Internal` (`update-failed`) - either backing store failed
    async fn update_user(
        &self,
        ctx: &CallerContext,
        id: &str,
        update: UserUpdate,
    ) -> Result<(), UserAdminError>;

    /// Deletes the profile document (best-effort) and the identity
    /// record for `id`.
    ///
    /// # Errors
    ///
    /// * `PermissionDenied` - the caller failed the management gate
    /// * `InvalidArgument` - `id` is empty
    /// * `Internal` (`delete-failed`) - the identity deletion failed
    async fn delete_user(&self, ctx: &CallerContext, id: &str) -> Result<(), UserAdminError>;

    /// Lists all profile documents, ordered by display name.
    ///
    /// # Errors
    ///
    /// * `PermissionDenied` - the caller failed the management gate
    /// * `Internal` (`list-failed`) - the document store failed
    async fn list_users(&self, ctx: &CallerContext) -> Result<Vec<UserRecord>, UserAdminError>;
}
