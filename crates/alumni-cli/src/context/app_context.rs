use std::rc::Rc;

use alumni_config::AlumniConfig;
use alumni_core::avatar::AvatarStyle;
use alumni_core::credentials::Credentials;
use alumni_core::entities::{Profile, ProfileFields};
use alumni_core::enums::NavTarget;
use alumni_store::{AccountStore, ProfileStore, StorageBackend, StoreError};
use anyhow::Context;

use super::{AppError, Session};

/// Owns both stores and the current session.
///
/// Every UI event goes through one of the methods below; views only ever
/// read the resulting state.
pub struct AppContext {
    pub config: AlumniConfig,
    accounts: AccountStore,
    profiles: ProfileStore,
    session: Option<Session>,
    view: NavTarget,
}

impl AppContext {
    /// Open the configured backend and both stores. Starts signed out.
    pub fn init(config: AlumniConfig) -> anyhow::Result<Self> {
        let backend = alumni_store::backend::from_config(&config.storage)
            .context("failed to open storage backend")?;
        Self::with_backend(config, &backend).context("failed to load persisted alumni data")
    }

    /// Open both stores on an existing backend.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if either persisted mapping cannot be read.
    pub fn with_backend(
        config: AlumniConfig,
        backend: &Rc<dyn StorageBackend>,
    ) -> Result<Self, StoreError> {
        let (accounts, profiles) = alumni_store::open_stores(backend, config.avatar.style())?;
        Ok(Self {
            config,
            accounts,
            profiles,
            session: None,
            view: NavTarget::default(),
        })
    }

    /// Create an account plus its default profile and sign in as it.
    ///
    /// # Errors
    ///
    /// Validation and duplicate-email errors from the account store; a
    /// `ProfileExists` or storage error if the default profile cannot be
    /// saved. In that case the new account is removed again, so the email
    /// can be registered once the cause is fixed.
    pub fn register(&mut self, email: &str, password: &str) -> Result<&Session, AppError> {
        let account = self.accounts.register(email, password)?;
        let profile = match self.profiles.create_default(&account) {
            Ok(profile) => profile,
            Err(error) => {
                if let Err(rollback) = self.accounts.remove(&account.email) {
                    tracing::error!(
                        account_id = %account.id,
                        %rollback,
                        "account left without a profile"
                    );
                }
                return Err(error.into());
            }
        };
        self.view = NavTarget::Profile;
        Ok(&*self.session.insert(Session {
            account,
            profile: Some(profile),
        }))
    }

    /// Sign in. An account without a profile still gets a session.
    ///
    /// # Errors
    ///
    /// `Validation` for blank input, `InvalidCredentials` otherwise.
    pub fn login(&mut self, email: &str, password: &str) -> Result<&Session, AppError> {
        let credentials = Credentials::new(email, password).map_err(StoreError::from)?;
        self.accounts.reload()?;
        self.profiles.reload()?;

        let account = self
            .accounts
            .authenticate(credentials.email(), credentials.password())?
            .clone();
        let profile = match self.profiles.find_by_owner(&account.id) {
            Ok(profile) => Some(profile.clone()),
            Err(StoreError::NotFound { .. }) => None,
            Err(error) => return Err(error.into()),
        };

        tracing::debug!(account_id = %account.id, has_profile = profile.is_some(), "signed in");
        self.view = NavTarget::Profile;
        Ok(&*self.session.insert(Session { account, profile }))
    }

    /// Drop the session. Returns whether anyone was signed in.
    pub fn logout(&mut self) -> bool {
        self.view = NavTarget::Profile;
        self.session.take().is_some()
    }

    /// Replace the signed-in account's profile with `fields`.
    ///
    /// # Errors
    ///
    /// `NotSignedIn` without a session; `NotFound` if the account has no
    /// profile to update.
    pub fn update_profile(&mut self, fields: ProfileFields) -> Result<&Profile, AppError> {
        let session = self.session.as_mut().ok_or(AppError::NotSignedIn)?;
        let updated = self.profiles.update(&session.account.id, fields)?;
        Ok(&*session.profile.insert(updated))
    }

    /// Every profile in creation order.
    #[must_use]
    pub fn alumni(&self) -> Vec<&Profile> {
        self.profiles.list_all()
    }

    pub fn navigate(&mut self, target: NavTarget) -> NavTarget {
        self.view = target;
        target
    }

    #[must_use]
    pub const fn view(&self) -> NavTarget {
        self.view
    }

    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub const fn avatar_style(&self) -> &AvatarStyle {
        self.profiles.avatar_style()
    }

    /// Display cap for alumni lists: `--limit` when given, else the configured default.
    #[must_use]
    pub fn list_limit(&self, flag: Option<u32>) -> usize {
        let limit = flag.unwrap_or(self.config.general.default_limit);
        usize::try_from(limit).unwrap_or(usize::MAX)
    }
}
