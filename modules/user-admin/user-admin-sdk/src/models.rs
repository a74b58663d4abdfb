//! Public models for the `user-admin` module.
//!
//! These are transport-agnostic data structures that define the contract
//! between the `user-admin` module and its consumers.

use admin_utils::SecretString;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role assigned to a profile whose input carries none.
pub const DEFAULT_ROLE: &str = "tech";

/// Loosely-typed profile payload as supplied by callers.
///
/// Deserialization never fails on wrong-typed fields: anything that is
/// not the expected shape degrades to the field's default, and empty
/// strings count as absent. This keeps a malformed payload from ever
/// reaching the document store partially typed - normalization fills in
/// whatever is left.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileInput {
    #[serde(deserialize_with = "lenient::string")]
    pub display_name: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient::string")]
    pub role: Option<String>,
    #[serde(deserialize_with = "lenient::string_seq")]
    pub building_scope: Vec<String>,
    #[serde(deserialize_with = "lenient::string_seq")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "lenient::boolean")]
    pub is_active: Option<bool>,
}

/// A fully-typed profile document payload.
///
/// Every field has a defined value, so merge-writing this payload can
/// never leave a partially-typed document behind. A `None` email means
/// "keep whatever the store already holds" under merge semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub phone: String,
    pub role: String,
    pub building_scope: Vec<String>,
    pub skills: Vec<String>,
    pub is_active: bool,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            display_name: String::new(),
            email: None,
            phone: String::new(),
            role: DEFAULT_ROLE.to_owned(),
            building_scope: Vec::new(),
            skills: Vec::new(),
            is_active: true,
        }
    }
}

/// A stored profile document annotated with its identity id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    #[serde(flatten)]
    pub profile: UserProfile,
    /// Server-assigned timestamp, stamped by the store on every write.
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a user.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password: SecretString,
    #[serde(default)]
    pub profile: ProfileInput,
}

/// Payload for updating a user.
///
/// Absent credential fields leave the identity record untouched; the
/// profile payload is always re-normalized and merge-written.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserUpdate {
    pub email: Option<String>,
    pub password: Option<SecretString>,
    #[serde(default)]
    pub profile: ProfileInput,
}

/// Result of a successful create operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedUser {
    pub id: String,
}

/// Lenient deserializers: wrong-typed input degrades to the default
/// instead of failing the whole payload.
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Accepts any JSON; yields `Some` only for non-empty strings.
    pub(super) fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::String(s)) if !s.is_empty() => Some(s),
            _ => None,
        })
    }

    /// Accepts any JSON; keeps the string elements of an array, anything
    /// else collapses to empty.
    pub(super) fn string_seq<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::Array(items)) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        })
    }

    /// Accepts any JSON; yields `Some` only for booleans.
    pub(super) fn boolean<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::Bool(b)) => Some(b),
            _ => None,
        })
    }
}
