//! Domain service for user administration.

use std::sync::Arc;

use tracing::{debug, error, info, instrument, warn};
use user_admin_sdk::{CallerContext, CreatedUser, NewUser, UserRecord, UserUpdate};

use super::error::DomainError;
use super::gate::AccessGate;
use super::ports::{AccountUpdate, IdentityProvider, NewAccount, ProfileRepository};
use super::profile::{role_or_default, sanitize};

/// Orchestrates the identity provider and the profile document store.
///
/// The two stores share no transaction boundary. Every operation applies
/// its mutations in a fixed order so that a failure between the two
/// calls leaves a known, bounded divergence until a later corrective
/// call; nothing is rolled back and nothing is retried here.
pub struct UserAdminService {
    gate: AccessGate,
    identity: Arc<dyn IdentityProvider>,
    profiles: Arc<dyn ProfileRepository>,
}

impl UserAdminService {
    #[must_use]
    pub fn new(
        gate: AccessGate,
        identity: Arc<dyn IdentityProvider>,
        profiles: Arc<dyn ProfileRepository>,
    ) -> Self {
        Self {
            gate,
            identity,
            profiles,
        }
    }

    /// Creates the identity record first (it mints the id the document
    /// is keyed by), then the role claim, then the profile document. A
    /// failure after account creation leaves an orphaned identity with
    /// no profile, an accepted end state, surfaced as `create-failed`.
    #[instrument(skip(self, ctx, new_user))]
    pub async fn create_user(
        &self,
        ctx: &CallerContext,
        new_user: NewUser,
    ) -> Result<CreatedUser, DomainError> {
        self.ensure_can_manage(ctx)?;

        if new_user.email.is_empty() || new_user.password.is_empty() {
            return Err(DomainError::invalid_argument(
                "email and password are required",
            ));
        }

        let NewUser {
            email,
            password,
            profile,
        } = new_user;

        let account = NewAccount {
            email: email.clone(),
            password,
            display_name: profile.display_name.clone().unwrap_or_default(),
        };
        let id = self
            .identity
            .create_account(account)
            .await
            .map_err(|e| internal("create-failed", e))?;

        let role = role_or_default(profile.role.clone());
        self.identity
            .set_role_claim(&id, &role)
            .await
            .map_err(|e| internal("create-failed", e))?;

        let doc = sanitize(profile, Some(email));
        self.profiles
            .upsert_merge(&id, doc)
            .await
            .map_err(|e| internal("create-failed", e))?;

        info!(user_id = %id, "user created");
        Ok(CreatedUser { id })
    }

    /// The identity update is partial: only the supplied credential
    /// fields are sent, and the call is skipped entirely when none are.
    /// The document write is unconditional, so a profile-only update
    /// never touches the identity provider.
    #[instrument(skip(self, ctx, update), fields(user_id = %id))]
    pub async fn update_user(
        &self,
        ctx: &CallerContext,
        id: &str,
        update: UserUpdate,
    ) -> Result<(), DomainError> {
        self.ensure_can_manage(ctx)?;

        if id.is_empty() {
            return Err(DomainError::invalid_argument("id is required"));
        }

        let UserUpdate {
            email,
            password,
            profile,
        } = update;

        // Empty strings count as "not supplied", like the lenient
        // profile fields.
        let email = email.filter(|e| !e.is_empty());
        let password = password.filter(|p| !p.is_empty());

        let account_update = AccountUpdate {
            email: email.clone(),
            display_name: profile.display_name.clone(),
            password,
        };
        if !account_update.is_empty() {
            self.identity
                .update_account(id, account_update)
                .await
                .map_err(|e| internal("update-failed", e))?;
        }

        if let Some(role) = profile.role.clone().filter(|r| !r.is_empty()) {
            self.identity
                .set_role_claim(id, &role)
                .await
                .map_err(|e| internal("update-failed", e))?;
        }

        // Email precedence: the request's new email, else the input
        // profile's email, else leave the stored value alone (merge).
        let merged_email = email.or_else(|| profile.email.clone());
        let doc = sanitize(profile, merged_email);
        self.profiles
            .upsert_merge(id, doc)
            .await
            .map_err(|e| internal("update-failed", e))?;

        debug!("user updated");
        Ok(())
    }

    /// The document is removed first and best-effort: its absence is an
    /// acceptable end state, so a failed document delete never blocks
    /// the identity deletion. The identity delete is the operation's
    /// real failure signal.
    #[instrument(skip(self, ctx), fields(user_id = %id))]
    pub async fn delete_user(&self, ctx: &CallerContext, id: &str) -> Result<(), DomainError> {
        self.ensure_can_manage(ctx)?;

        if id.is_empty() {
            return Err(DomainError::invalid_argument("id is required"));
        }

        if let Err(e) = self.profiles.delete(id).await {
            debug!(error = ?e, "profile document delete failed, treating as absent");
        }

        self.identity
            .delete_account(id)
            .await
            .map_err(|e| internal("delete-failed", e))?;

        info!("user deleted");
        Ok(())
    }

    /// Pure document-store read; the identity provider is not consulted.
    #[instrument(skip(self, ctx))]
    pub async fn list_users(&self, ctx: &CallerContext) -> Result<Vec<UserRecord>, DomainError> {
        self.ensure_can_manage(ctx)?;

        let users = self
            .profiles
            .list_by_display_name()
            .await
            .map_err(|e| internal("list-failed", e))?;

        debug!(count = users.len(), "listed users");
        Ok(users)
    }

    fn ensure_can_manage(&self, ctx: &CallerContext) -> Result<(), DomainError> {
        if self.gate.can_manage(ctx) {
            Ok(())
        } else {
            warn!("management access denied");
            Err(DomainError::PermissionDenied)
        }
    }
}

/// Logs a collaborator failure with full detail and wraps it into the
/// opaque `Internal` error the caller sees.
fn internal(code: &'static str, source: anyhow::Error) -> DomainError {
    error!(error = ?source, code, "user administration operation failed");
    DomainError::internal(code, source)
}
