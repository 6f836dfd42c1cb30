use crate::errors::CoreError;

/// Trimmed, non-empty email/password pair as submitted on the login form.
///
/// Both register and login go through [`Credentials::new`], so the stored
/// email is always the trimmed one and lookups use the same normalisation.
/// Email comparison stays case-sensitive.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Trim both values and require that neither is empty.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if either value is blank.
    pub fn new(email: &str, password: &str) -> Result<Self, CoreError> {
        let email = email.trim();
        let password = password.trim();
        if email.is_empty() || password.is_empty() {
            return Err(CoreError::Validation(
                "email and password are both required".into(),
            ));
        }
        Ok(Self {
            email: email.to_string(),
            password: password.to_string(),
        })
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
