#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(dead_code)]

//! Common test utilities for user-admin integration tests

use std::sync::Arc;

use admin_utils::SecretString;
use user_admin::domain::gate::{AccessGate, AllowedOrigins};
use user_admin::domain::service::UserAdminService;
use user_admin::infra::{InMemoryIdentityProvider, InMemoryProfileRepository};
use user_admin_sdk::{CallerContext, NewUser, ProfileInput};

/// Origin trusted by every test harness.
pub const TRUSTED_ORIGIN: &str = "https://ops.crewdesk.io";

pub struct TestHarness {
    pub service: Arc<UserAdminService>,
    pub identity: Arc<InMemoryIdentityProvider>,
    pub profiles: Arc<InMemoryProfileRepository>,
}

pub fn harness() -> TestHarness {
    let identity = Arc::new(InMemoryIdentityProvider::new());
    let profiles = Arc::new(InMemoryProfileRepository::new());
    let gate = AccessGate::new(AllowedOrigins::new([TRUSTED_ORIGIN]));
    let service = Arc::new(UserAdminService::new(
        gate,
        identity.clone(),
        profiles.clone(),
    ));
    TestHarness {
        service,
        identity,
        profiles,
    }
}

pub fn admin_ctx() -> CallerContext {
    CallerContext::authenticated("admin-subject", Some("admin".to_owned()))
}

pub fn anonymous_from(origin: &str) -> CallerContext {
    CallerContext::anonymous().with_origin(origin)
}

pub fn new_user(email: &str, display_name: &str, role: Option<&str>) -> NewUser {
    NewUser {
        email: email.to_owned(),
        password: SecretString::new("secret1"),
        profile: ProfileInput {
            display_name: Some(display_name.to_owned()),
            role: role.map(ToOwned::to_owned),
            ..ProfileInput::default()
        },
    }
}
