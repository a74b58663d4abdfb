//! In-memory collaborator adapters.
//!
//! Development and test stand-ins for the external identity provider and
//! the external profile document store. State is process-local and
//! volatile; a deployment substitutes real adapters behind the same
//! ports.

mod identity;
mod profiles;

pub use identity::{AccountSnapshot, InMemoryIdentityProvider};
pub use profiles::InMemoryProfileRepository;
