//! Error types for the session crate.
//!
//! - `PersistenceError`: failures writing or clearing the persisted session
//! - `CredentialError`: rejected login form submissions
//!
//! Neither is allowed to reach the view layer unhandled. Persistence
//! failures are logged and the session carries on in memory; credential
//! failures become the login form's error line.

use std::fmt;

/// Errors from persisting the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// The user record could not be serialized.
    Serialize { reason: String },
    /// The underlying key-value store rejected the operation.
    Storage { reason: String },
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serialize { reason } => {
                write!(f, "failed to serialize session user: {reason}")
            }
            Self::Storage { reason } => {
                write!(f, "session storage failed: {reason}")
            }
        }
    }
}

impl std::error::Error for PersistenceError {}

/// Errors from the login credential check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    /// A required form field was empty.
    MissingField { field: &'static str },
    /// The email/password pair was not recognized.
    InvalidCredentials,
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "{field} is required"),
            Self::InvalidCredentials => write!(f, "Invalid username or password"),
        }
    }
}

impl std::error::Error for CredentialError {}
