//! Demo credential check behind the login form.
//!
//! There is no server: a single demo account is accepted. The check runs
//! before [`SessionStore::login`](crate::SessionStore::login), which never
//! sees rejected credentials.

use crate::error::CredentialError;
use crate::user::User;

/// Email of the demo administrator account.
pub const DEMO_EMAIL: &str = "admin@email.com";

/// Password of the demo administrator account.
pub const DEMO_PASSWORD: &str = "password";

/// Checks a login form submission.
///
/// The email is compared after trimming surrounding whitespace; the
/// password is compared exactly, though a whitespace-only password counts
/// as missing.
///
/// # Errors
///
/// Returns [`CredentialError::MissingField`] for an empty field and
/// [`CredentialError::InvalidCredentials`] for anything other than the demo
/// account.
pub fn authenticate(email: &str, password: &str) -> Result<User, CredentialError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(CredentialError::MissingField { field: "email" });
    }
    if password.trim().is_empty() {
        return Err(CredentialError::MissingField { field: "password" });
    }

    if email != DEMO_EMAIL || password != DEMO_PASSWORD {
        tracing::debug!(email, "Rejected login attempt");
        return Err(CredentialError::InvalidCredentials);
    }

    Ok(User::new("Admin", email, "Administrator", "full"))
}
