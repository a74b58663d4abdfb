//! Profile payload normalization.

use user_admin_sdk::models::DEFAULT_ROLE;
use user_admin_sdk::{ProfileInput, UserProfile};

/// Fills defaults and discards wrong-typed input so that every write to
/// the document store is fully typed.
///
/// `email` is the already-merged email for this write; `None` keeps
/// whatever the store holds under merge-write semantics. Sequence and
/// boolean fields are always written: an absent sequence becomes empty,
/// an absent boolean becomes `true`.
pub fn sanitize(input: ProfileInput, email: Option<String>) -> UserProfile {
    UserProfile {
        display_name: input.display_name.unwrap_or_default(),
        email,
        phone: input.phone.unwrap_or_default(),
        role: role_or_default(input.role),
        building_scope: input.building_scope,
        skills: input.skills,
        is_active: input.is_active.unwrap_or(true),
    }
}

/// The effective role for an input: the supplied non-empty role, or the
/// default. Never empty.
pub fn role_or_default(role: Option<String>) -> String {
    role.filter(|r| !r.is_empty())
        .unwrap_or_else(|| DEFAULT_ROLE.to_owned())
}
