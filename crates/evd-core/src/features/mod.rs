//! Feature slices (state + operations per concern).

pub mod auth;
pub mod events;
