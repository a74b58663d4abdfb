//! Collaborator ports for the user-admin domain.
//!
//! The identity provider and the profile document store live outside
//! this process and expose no shared transaction boundary. The service
//! sequences calls against these traits in a fixed order per operation
//! to bound the inconsistency window; nothing here is transactional.

use admin_utils::SecretString;
use async_trait::async_trait;
use user_admin_sdk::{UserProfile, UserRecord};

/// Payload for a new identity record.
#[derive(Debug)]
pub struct NewAccount {
    pub email: String,
    pub password: SecretString,
    pub display_name: String,
}

/// Partial identity record update; absent fields stay untouched.
#[derive(Debug, Default)]
pub struct AccountUpdate {
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub password: Option<SecretString>,
}

impl AccountUpdate {
    /// `true` when applying this update would be a no-op.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.email.is_none() && self.display_name.is_none() && self.password.is_none()
    }
}

/// Identity-provider operations required by the service.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Creates an identity record and returns its new id.
    async fn create_account(&self, account: NewAccount) -> anyhow::Result<String>;

    /// Applies a partial update to an existing identity record.
    async fn update_account(&self, id: &str, update: AccountUpdate) -> anyhow::Result<()>;

    /// Deletes an identity record.
    async fn delete_account(&self, id: &str) -> anyhow::Result<()>;

    /// Sets the `role` claim on an identity record.
    async fn set_role_claim(&self, id: &str, role: &str) -> anyhow::Result<()>;
}

/// Profile document store operations required by the service.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Fetches the profile document for `id`, if present.
    async fn find(&self, id: &str) -> anyhow::Result<Option<UserRecord>>;

    /// Merge-writes `profile` at `id`, stamping the server timestamp.
    /// A `None` email leaves the stored email untouched.
    async fn upsert_merge(&self, id: &str, profile: UserProfile) -> anyhow::Result<()>;

    /// Deletes the profile document. Deleting an absent document is a
    /// no-op, not an error.
    async fn delete(&self, id: &str) -> anyhow::Result<()>;

    /// All profile documents ordered by display name, ascending and
    /// case-sensitive.
    async fn list_by_display_name(&self) -> anyhow::Result<Vec<UserRecord>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_update_emptiness() {
        assert!(AccountUpdate::default().is_empty());

        let update = AccountUpdate {
            email: Some("a@x.com".to_owned()),
            ..AccountUpdate::default()
        };
        assert!(!update.is_empty());

        let update = AccountUpdate {
            password: Some(SecretString::new("secret1")),
            ..AccountUpdate::default()
        };
        assert!(!update.is_empty());
    }
}
