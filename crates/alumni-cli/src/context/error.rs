use alumni_store::StoreError;
use thiserror::Error;

use crate::messages;

/// Errors surfaced by controller operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// A profile operation was attempted without a session.
    #[error("not signed in")]
    NotSignedIn,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    /// The banner text for outcomes the user can fix by resubmitting.
    ///
    /// `None` means a storage failure or a sequencing bug; those propagate.
    #[must_use]
    pub const fn user_message(&self) -> Option<&'static str> {
        match self {
            Self::NotSignedIn => Some(messages::LOGIN_REQUIRED),
            Self::Store(error) => error.user_message(),
        }
    }

    /// Fold into `anyhow`, replacing recoverable errors with their banner text.
    #[must_use]
    pub fn into_report(self) -> anyhow::Error {
        match self.user_message() {
            Some(message) => anyhow::anyhow!(message),
            None => anyhow::Error::new(self),
        }
    }
}
