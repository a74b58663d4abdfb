//! User administration module.
//!
//! Orchestrates an external identity provider and an external profile
//! document store behind an access-control gate. The public API is
//! defined in `user-admin-sdk` and re-exported here.

pub use user_admin_sdk::{
    CallerContext, CreatedUser, NewUser, ProfileInput, UserAdminApi, UserAdminError, UserProfile,
    UserRecord, UserUpdate,
};

pub mod api;
pub mod config;
pub mod domain;
pub mod infra;
pub mod local_client;

pub use local_client::UserAdminLocalClient;
