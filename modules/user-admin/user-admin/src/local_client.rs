//! Local client implementing the `UserAdminApi` trait.

use std::sync::Arc;

use async_trait::async_trait;
use user_admin_sdk::{
    CallerContext, CreatedUser, NewUser, UserAdminApi, UserAdminError, UserRecord, UserUpdate,
};

use crate::domain::service::UserAdminService;

/// In-process client for the user-admin module.
///
/// Implements [`UserAdminApi`] by delegating to the domain service, so
/// consumers depend on the trait rather than the service type.
pub struct UserAdminLocalClient {
    service: Arc<UserAdminService>,
}

impl UserAdminLocalClient {
    #[must_use]
    pub fn new(service: Arc<UserAdminService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl UserAdminApi for UserAdminLocalClient {
    async fn create_user(
        &self,
        ctx: &CallerContext,
        new_user: NewUser,
    ) -> Result<CreatedUser, UserAdminError> {
        self.service
            .create_user(ctx, new_user)
            .await
            .map_err(UserAdminError::from)
    }

    async fn update_user(
        &self,
        ctx: &CallerContext,
        id: &str,
        update: UserUpdate,
    ) -> Result<(), UserAdminError> {
        self.service
            .update_user(ctx, id, update)
            .await
            .map_err(UserAdminError::from)
    }

    async fn delete_user(&self, ctx: &CallerContext, id: &str) -> Result<(), UserAdminError> {
        self.service
            .delete_user(ctx, id)
            .await
            .map_err(UserAdminError::from)
    }

    async fn list_users(&self, ctx: &CallerContext) -> Result<Vec<UserRecord>, UserAdminError> {
        self.service
            .list_users(ctx)
            .await
            .map_err(UserAdminError::from)
    }
}
