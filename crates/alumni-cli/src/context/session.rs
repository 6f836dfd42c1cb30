use alumni_core::entities::{Account, Profile};

/// The signed-in account and its profile, if it has one.
///
/// Held in memory only; every process starts signed out.
#[derive(Debug, Clone)]
pub struct Session {
    pub account: Account,
    pub profile: Option<Profile>,
}

impl Session {
    #[must_use]
    pub fn account_id(&self) -> &str {
        &self.account.id
    }
}
