//! In-memory profile document store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use user_admin_sdk::{UserProfile, UserRecord};

use crate::domain::ports::ProfileRepository;

/// In-memory profile document store.
///
/// Writes use merge semantics: a payload without an email keeps the
/// email already stored at that id. `updated_at` is stamped on every
/// write; deleting an absent document is a no-op, matching the document
/// store contract the domain relies on.
#[derive(Default)]
pub struct InMemoryProfileRepository {
    docs: RwLock<BTreeMap<String, UserRecord>>,
}

impl InMemoryProfileRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.docs.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.docs.read().is_empty()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find(&self, id: &str) -> anyhow::Result<Option<UserRecord>> {
        Ok(self.docs.read().get(id).cloned())
    }

    async fn upsert_merge(&self, id: &str, mut profile: UserProfile) -> anyhow::Result<()> {
        let mut docs = self.docs.write();
        if profile.email.is_none() {
            if let Some(existing) = docs.get(id) {
                profile.email = existing.profile.email.clone();
            }
        }
        docs.insert(
            id.to_owned(),
            UserRecord {
                id: id.to_owned(),
                profile,
                updated_at: Utc::now(),
            },
        );
        Ok(())
    }

    async fn delete(&self, id: &str) -> anyhow::Result<()> {
        self.docs.write().remove(id);
        Ok(())
    }

    async fn list_by_display_name(&self) -> anyhow::Result<Vec<UserRecord>> {
        let mut users: Vec<UserRecord> = self.docs.read().values().cloned().collect();
        users.sort_by(|a, b| a.profile.display_name.cmp(&b.profile.display_name));
        Ok(users)
    }
}
