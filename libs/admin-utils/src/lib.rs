//! Shared utility types for CrewDesk crates.

mod secret_string;

pub use secret_string::SecretString;
