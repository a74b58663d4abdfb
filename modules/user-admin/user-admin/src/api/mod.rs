//! API layer for the user-admin module.

pub mod rest;
