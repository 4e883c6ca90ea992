//! The signed-in user record.

use serde::{Deserialize, Serialize};

/// The user attached to an authenticated session.
///
/// All fields are free-form strings supplied by the credential check. The
/// persisted form is JSON with camelCase keys:
/// `{"username":"admin","email":"admin@hotel.com","role":"Administrator","accessScope":"full"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    username: String,
    email: String,
    role: String,
    access_scope: String,
}

impl User {
    /// Creates a user record.
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
        access_scope: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            role: role.into(),
            access_scope: access_scope.into(),
        }
    }

    /// Returns the display username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the role label, e.g. "Administrator".
    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Returns the access scope, e.g. "full".
    #[must_use]
    pub fn access_scope(&self) -> &str {
        &self.access_scope
    }
}
