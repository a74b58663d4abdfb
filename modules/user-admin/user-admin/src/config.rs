//! Configuration for the user-admin module.

use serde::{Deserialize, Serialize};

/// Configuration for the user-admin module.
///
/// Process-wide static values, loaded once at startup and injected into
/// the components that need them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct UserAdminConfig {
    /// Front-end origins allowed to call management operations without
    /// authentication, e.g. `https://ops.example.com`.
    pub allowed_origins: Vec<String>,

    /// Deployment region of the identity service.
    pub identity_region: String,
}

impl Default for UserAdminConfig {
    fn default() -> Self {
        Self {
            allowed_origins: Vec::new(),
            identity_region: "us-central1".to_owned(),
        }
    }
}
