//! Account store: register, authenticate, reject duplicate emails.

use std::rc::Rc;

use alumni_core::credentials::Credentials;
use alumni_core::entities::Account;
use alumni_core::ids::next_account_id;

use crate::backend::StorageBackend;
use crate::error::StoreError;
use crate::persisted::PersistedMap;

/// Storage key of the email -> account mapping.
pub const ACCOUNTS_KEY: &str = "alumniUsers";

/// Milliseconds since the Unix epoch; injectable for tests.
pub type Clock = fn() -> i64;

fn system_clock() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

pub struct AccountStore {
    accounts: PersistedMap<Account>,
    clock: Clock,
}

impl AccountStore {
    /// Load the account mapping from `backend`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the persisted mapping cannot be read.
    pub fn open(backend: Rc<dyn StorageBackend>) -> Result<Self, StoreError> {
        Ok(Self {
            accounts: PersistedMap::open(backend, ACCOUNTS_KEY)?,
            clock: system_clock,
        })
    }

    /// Replace the clock used for ID generation.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Create an account for `email`.
    ///
    /// Email and password are trimmed first and must both be non-empty.
    /// The new mapping is persisted before this returns.
    ///
    /// # Errors
    ///
    /// - `StoreError::Validation` if either value is blank
    /// - `StoreError::DuplicateEmail` if the (trimmed, case-sensitive) email exists
    /// - storage errors from the backend
    pub fn register(&mut self, email: &str, password: &str) -> Result<Account, StoreError> {
        let credentials = Credentials::new(email, password)?;
        let now = (self.clock)();

        let account = self.accounts.mutate(|accounts| {
            if accounts.contains_key(credentials.email()) {
                return Err(StoreError::DuplicateEmail {
                    email: credentials.email().to_string(),
                });
            }
            let id = next_account_id(now, accounts.values().map(|a| a.id.as_str()));
            let account = Account {
                email: credentials.email().to_string(),
                password: credentials.password().to_string(),
                id,
            };
            accounts.insert(account.email.clone(), account.clone());
            Ok(account)
        })?;

        tracing::info!(account_id = %account.id, email = %account.email, "registered account");
        Ok(account)
    }

    /// Return the account whose email and password both match exactly.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidCredentials` for an unknown email or a wrong
    /// password alike.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<&Account, StoreError> {
        self.accounts
            .get(email)
            .filter(|account| account.password == password)
            .ok_or(StoreError::InvalidCredentials)
    }

    /// Delete the account registered under `email`.
    ///
    /// Only used to undo a registration whose default profile could not be
    /// saved. Returns the removed account, if there was one.
    ///
    /// # Errors
    ///
    /// Returns storage errors from the backend; the mapping is then unchanged.
    pub fn remove(&mut self, email: &str) -> Result<Option<Account>, StoreError> {
        let removed = self.accounts.mutate(|accounts| Ok(accounts.remove(email)))?;
        if let Some(account) = &removed {
            tracing::warn!(account_id = %account.id, "removed account");
        }
        Ok(removed)
    }

    #[must_use]
    pub fn find_by_email(&self, email: &str) -> Option<&Account> {
        self.accounts.get(email)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.entries().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.entries().is_empty()
    }

    /// Pick up accounts written by other instances since open.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the persisted mapping cannot be read.
    pub fn reload(&mut self) -> Result<(), StoreError> {
        self.accounts.reload()
    }
}
