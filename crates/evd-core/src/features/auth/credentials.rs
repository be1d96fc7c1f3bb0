//! Mock account table.
//!
//! The app has no identity service; these two accounts are the whole
//! credential boundary.

use super::state::{Role, User};

/// A hardcoded account that `login` accepts.
#[derive(Debug, Clone, Copy)]
pub struct MockAccount {
    pub id: i64,
    pub email: &'static str,
    pub password: &'static str,
    pub name: &'static str,
    pub role: Role,
}

impl MockAccount {
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }

    pub fn to_user(&self) -> User {
        User {
            id: self.id,
            email: self.email.to_string(),
            name: self.name.to_string(),
            role: self.role,
        }
    }
}

/// Accounts checked by `login`, in order.
pub const MOCK_ACCOUNTS: &[MockAccount] = &[
    MockAccount {
        id: 1,
        email: "admin@example.com",
        password: "admin123",
        name: "Admin User",
        role: Role::Admin,
    },
    MockAccount {
        id: 2,
        email: "user@example.com",
        password: "user123",
        name: "Regular User",
        role: Role::User,
    },
];

/// Returns the account matching both email and password exactly.
pub fn find_account(email: &str, password: &str) -> Option<&'static MockAccount> {
    MOCK_ACCOUNTS.iter().find(|a| a.matches(email, password))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_account_requires_exact_pair() {
        assert!(find_account("admin@example.com", "admin123").is_some());
        assert!(find_account("user@example.com", "user123").is_some());
        assert!(find_account("admin@example.com", "user123").is_none());
        assert!(find_account("ADMIN@example.com", "admin123").is_none());
        assert!(find_account("admin@example.com ", "admin123").is_none());
    }

    #[test]
    fn test_accounts_map_to_expected_roles() {
        let admin = find_account("admin@example.com", "admin123").unwrap().to_user();
        assert_eq!(admin.id, 1);
        assert_eq!(admin.name, "Admin User");
        assert_eq!(admin.role, Role::Admin);

        let user = find_account("user@example.com", "user123").unwrap().to_user();
        assert_eq!(user.id, 2);
        assert_eq!(user.name, "Regular User");
        assert_eq!(user.role, Role::User);
    }
}
