use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A registered login. Keyed by `email` in the accounts mapping.
///
/// Created once at registration and never mutated afterwards.
#[derive(Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Account {
    pub email: String,
    /// Stored verbatim; compared in plaintext.
    pub password: String,
    #[serde(alias = "uid")]
    pub id: String,
}

impl Account {
    /// The part of the email before the first `@` (the whole email if there is none).
    #[must_use]
    pub fn local_part(&self) -> &str {
        self.email.split('@').next().unwrap_or_default()
    }
}

impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("id", &self.id)
            .finish()
    }
}
