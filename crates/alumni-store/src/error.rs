//! Store error types for alumni-store.

use alumni_core::errors::CoreError;
use thiserror::Error;

/// Errors from account and profile store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Registration with an email that already has an account.
    #[error("Email already registered: {email}")]
    DuplicateEmail { email: String },

    /// Unknown email or wrong password. Deliberately does not say which.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// No profile exists for the account.
    #[error("No profile found for account {owner_id}")]
    NotFound { owner_id: String },

    /// A required field was blank.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A second default profile was requested for the same account.
    #[error("Profile already exists for account {owner_id}")]
    ProfileExists { owner_id: String },

    /// The backend could not read or write a value.
    #[error("Storage error: {0}")]
    Storage(String),

    /// A persisted mapping is not valid JSON for its record type.
    #[error("Persisted mapping '{key}' is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A mapping could not be serialized.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// Whether the user can recover by correcting input and resubmitting.
    ///
    /// Everything else is a storage failure or a sequencing bug.
    #[must_use]
    pub const fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::DuplicateEmail { .. }
                | Self::InvalidCredentials
                | Self::NotFound { .. }
                | Self::Validation(_)
        )
    }

    /// Banner text shown to the user, for the user-facing variants.
    #[must_use]
    pub const fn user_message(&self) -> Option<&'static str> {
        match self {
            Self::Validation(_) => Some("Please enter both email and password."),
            Self::DuplicateEmail { .. } => Some("Email is already in use."),
            Self::InvalidCredentials => Some("Invalid email or password."),
            Self::NotFound { .. } => Some("No profile found for this account."),
            _ => None,
        }
    }
}

impl From<CoreError> for StoreError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(reason) => Self::Validation(reason),
        }
    }
}
