//! Auth feature slice.
//!
//! - `state.rs`: `AuthStore`, `User`, `Role`, login/signup/logout
//! - `credentials.rs`: the mock account table `login` checks against

pub mod credentials;
mod state;

pub use state::{AuthError, AuthResult, AuthStore, Role, Session, UnknownRole, User};
