//! Navigation guard.
//!
//! Runs before every navigation. Checks are ordered: authentication first,
//! then the admin role.

use serde::Serialize;

use super::routes::{AUTH_PATH, HOME_PATH, RouteMeta};
use crate::features::auth::AuthStore;

/// What the guard decided for one navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", content = "to", rename_all = "snake_case")]
pub enum GuardDecision {
    Proceed,
    Redirect(&'static str),
}

/// Evaluates the target's access flags against the current session.
pub fn guard(meta: RouteMeta, auth: &AuthStore) -> GuardDecision {
    if meta.requires_auth && !auth.is_authenticated() {
        GuardDecision::Redirect(AUTH_PATH)
    } else if meta.requires_admin && !auth.is_admin() {
        GuardDecision::Redirect(HOME_PATH)
    } else {
        GuardDecision::Proceed
    }
}
