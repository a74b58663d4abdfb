//! REST DTOs for the user-admin module.

use admin_utils::SecretString;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use user_admin_sdk::{NewUser, ProfileInput, UserRecord, UserUpdate};
use utoipa::ToSchema;

/// Request DTO for creating a user.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub email: String,
    #[schema(value_type = String)]
    pub password: SecretString,
    /// Loosely-typed profile payload; wrong-typed fields degrade to
    /// defaults instead of rejecting the request.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub profile: ProfileInput,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            email: req.email,
            password: req.password,
            profile: req.profile,
        }
    }
}

/// Response DTO for a created user.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateUserResponse {
    /// Identity-provider id of the new user.
    pub id: String,
}

/// Request DTO for updating a user.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    #[schema(value_type = Option<String>)]
    pub password: Option<SecretString>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub profile: ProfileInput,
}

impl From<UpdateUserRequest> for UserUpdate {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            email: req.email,
            password: req.password,
            profile: req.profile,
        }
    }
}

/// Acknowledgement payload for update and delete operations.
#[derive(Debug, Serialize, ToSchema)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    #[must_use]
    pub const fn ok() -> Self {
        Self { ok: true }
    }
}

/// A profile document annotated with its identity id.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub phone: String,
    pub role: String,
    pub building_scope: Vec<String>,
    pub skills: Vec<String>,
    pub is_active: bool,
    pub updated_at: DateTime<Utc>,
}

impl From<UserRecord> for UserDto {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            display_name: record.profile.display_name,
            email: record.profile.email,
            phone: record.profile.phone,
            role: record.profile.role,
            building_scope: record.profile.building_scope,
            skills: record.profile.skills,
            is_active: record.profile.is_active,
            updated_at: record.updated_at,
        }
    }
}

/// Response DTO for the user listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListUsersResponse {
    pub users: Vec<UserDto>,
}
