//! User Admin SDK
//!
//! This crate provides the public API for the `user-admin` module:
//! - `UserAdminApi` trait for in-process consumers
//! - `CallerContext` carrying per-request identity and origin metadata
//! - Profile and request models, including the lenient `ProfileInput`
//! - `UserAdminError` with stable machine-readable codes
//!
//! ## Usage
//!
//! Consumers hold the client behind the trait:
//! ```ignore
//! use user_admin_sdk::{CallerContext, UserAdminApi};
//!
//! let client: Arc<dyn UserAdminApi> = make_client();
//!
//! let ctx = CallerContext::authenticated("subject-1", Some("admin".to_owned()));
//! let created = client.create_user(&ctx, new_user).await?;
//! let users = client.list_users(&ctx).await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod context;
pub mod error;
pub mod models;

// Re-export main types at crate root for convenience
pub use api::UserAdminApi;
pub use context::{AuthClaims, CallerContext};
pub use error::UserAdminError;
pub use models::{CreatedUser, NewUser, ProfileInput, UserProfile, UserRecord, UserUpdate};
