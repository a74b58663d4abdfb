//! In-memory identity provider.

use std::collections::HashMap;

use admin_utils::SecretString;
use anyhow::{Context as _, bail};
use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::domain::ports::{AccountUpdate, IdentityProvider, NewAccount};

struct AccountRecord {
    email: String,
    display_name: String,
    role: Option<String>,
    #[allow(dead_code)]
    password: SecretString,
}

/// Credential-free view of a stored account, for wiring checks and
/// tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSnapshot {
    pub email: String,
    pub display_name: String,
    pub role: Option<String>,
}

/// In-memory identity provider.
///
/// Follows the strict provider contract: operations against unknown ids
/// fail, deletes included, and account emails are unique. Ids are
/// freshly minted v4 UUIDs.
#[derive(Default)]
pub struct InMemoryIdentityProvider {
    accounts: RwLock<HashMap<String, AccountRecord>>,
}

impl InMemoryIdentityProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of a stored account, without its credentials.
    #[must_use]
    pub fn account(&self, id: &str) -> Option<AccountSnapshot> {
        self.accounts.read().get(id).map(|record| AccountSnapshot {
            email: record.email.clone(),
            display_name: record.display_name.clone(),
            role: record.role.clone(),
        })
    }

    /// Number of stored accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.read().is_empty()
    }
}

#[async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn create_account(&self, account: NewAccount) -> anyhow::Result<String> {
        let mut accounts = self.accounts.write();
        if accounts.values().any(|a| a.email == account.email) {
            bail!("account with email {} already exists", account.email);
        }

        let id = Uuid::new_v4().to_string();
        accounts.insert(
            id.clone(),
            AccountRecord {
                email: account.email,
                display_name: account.display_name,
                role: None,
                password: account.password,
            },
        );
        Ok(id)
    }

    async fn update_account(&self, id: &str, update: AccountUpdate) -> anyhow::Result<()> {
        let mut accounts = self.accounts.write();
        let record = accounts
            .get_mut(id)
            .with_context(|| format!("no account with id {id}"))?;

        if let Some(email) = update.email {
            record.email = email;
        }
        if let Some(display_name) = update.display_name {
            record.display_name = display_name;
        }
        if let Some(password) = update.password {
            record.password = password;
        }
        Ok(())
    }

    async fn delete_account(&self, id: &str) -> anyhow::Result<()> {
        let mut accounts = self.accounts.write();
        if accounts.remove(id).is_none() {
            bail!("no account with id {id}");
        }
        Ok(())
    }

    async fn set_role_claim(&self, id: &str, role: &str) -> anyhow::Result<()> {
        let mut accounts = self.accounts.write();
        let record = accounts
            .get_mut(id)
            .with_context(|| format!("no account with id {id}"))?;
        record.role = Some(role.to_owned());
        Ok(())
    }
}
