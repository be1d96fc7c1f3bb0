//! Authentication state.
//!
//! Holds the current user (if any). "Authenticated" is not stored separately:
//! it is the presence of a user, so the two can never disagree.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::credentials;
use crate::clock::{Clock, TimestampIds};

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role '{0}' (expected admin or user)")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// The logged-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: Role,
}

/// Login failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Wire shape of a login/signup outcome: `{ "success": true }` or
/// `{ "success": false, "error": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> From<&Result<T, AuthError>> for AuthResult {
    fn from(result: &Result<T, AuthError>) -> Self {
        match result {
            Ok(_) => AuthResult {
                success: true,
                error: None,
            },
            Err(e) => AuthResult {
                success: false,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Read-only snapshot of the session for consumers and serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_admin: bool,
}

/// Session store.
#[derive(Debug)]
pub struct AuthStore {
    user: Option<User>,
    clock: Arc<dyn Clock>,
    ids: TimestampIds,
}

impl AuthStore {
    /// Creates a logged-out store.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            user: None,
            clock,
            ids: TimestampIds::new(),
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Recomputed from the current user on every read.
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role == Role::Admin)
    }

    pub fn session(&self) -> Session {
        Session {
            user: self.user.clone(),
            is_authenticated: self.is_authenticated(),
            is_admin: self.is_admin(),
        }
    }

    /// Logs in against the mock accounts.
    ///
    /// On success the user is replaced wholesale. On failure the current
    /// session is left as it was.
    pub fn login(&mut self, email: &str, password: &str) -> Result<&User, AuthError> {
        let Some(account) = credentials::find_account(email, password) else {
            tracing::warn!(email, "login rejected");
            return Err(AuthError::InvalidCredentials);
        };
        tracing::info!(email, role = %account.role, "logged in");
        Ok(&*self.user.insert(account.to_user()))
    }

    /// Creates and logs in a new user. Always succeeds; nothing is checked
    /// and nothing is stored beyond the session.
    pub fn signup(&mut self, name: &str, email: &str, _password: &str, role: Role) -> &User {
        let id = self.ids.issue(self.clock.as_ref());
        tracing::info!(email, %role, id, "signed up");
        self.user.insert(User {
            id,
            email: email.to_string(),
            name: name.to_string(),
            role,
        })
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!(email = %user.email, "logged out");
        }
    }
}
