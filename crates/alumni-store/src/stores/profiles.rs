//! Profile store: default profile at registration, lookup by owner, full-record update.

use std::collections::BTreeMap;
use std::rc::Rc;

use alumni_core::avatar::AvatarStyle;
use alumni_core::entities::{Account, Profile, ProfileFields};

use crate::backend::StorageBackend;
use crate::error::StoreError;
use crate::persisted::PersistedMap;

/// Storage key of the account id -> profile mapping.
pub const PROFILES_KEY: &str = "alumniProfiles";

pub struct ProfileStore {
    profiles: PersistedMap<Profile>,
    avatar: AvatarStyle,
}

/// Key under which `owner_id`'s profile is stored.
///
/// Profiles are keyed by account id; mappings written by older prototypes
/// may use other keys, so fall back to the first record whose `owner_id`
/// matches.
fn locate<'a>(profiles: &'a BTreeMap<String, Profile>, owner_id: &str) -> Option<&'a str> {
    if profiles
        .get(owner_id)
        .is_some_and(|profile| profile.owner_id == owner_id)
    {
        return profiles.get_key_value(owner_id).map(|(key, _)| key.as_str());
    }
    profiles
        .iter()
        .find(|(_, profile)| profile.owner_id == owner_id)
        .map(|(key, _)| key.as_str())
}

impl ProfileStore {
    /// Load the profile mapping from `backend`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the persisted mapping cannot be read.
    pub fn open(backend: Rc<dyn StorageBackend>, avatar: AvatarStyle) -> Result<Self, StoreError> {
        Ok(Self {
            profiles: PersistedMap::open(backend, PROFILES_KEY)?,
            avatar,
        })
    }

    #[must_use]
    pub const fn avatar_style(&self) -> &AvatarStyle {
        &self.avatar
    }

    /// Create the initial profile for a just-registered account.
    ///
    /// `name` is the email local part and the avatar shows its initials
    /// (capped at `registration_initials`); every other field is blank.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ProfileExists` if the account already has a
    /// profile, or if its id already keys another owner's record. That only
    /// happens on a sequencing bug; the existing profile and the persisted
    /// mapping are left untouched.
    pub fn create_default(&mut self, account: &Account) -> Result<Profile, StoreError> {
        let name = account.local_part().to_string();
        let profile = Profile {
            owner_id: account.id.clone(),
            email: account.email.clone(),
            avatar_ref: self.avatar.for_registration(&name),
            name,
            ..Profile::default()
        };

        let result = self.profiles.mutate(|profiles| {
            if profiles.contains_key(&account.id) || locate(profiles, &account.id).is_some() {
                return Err(StoreError::ProfileExists {
                    owner_id: account.id.clone(),
                });
            }
            profiles.insert(account.id.clone(), profile.clone());
            Ok(())
        });

        if let Err(StoreError::ProfileExists { owner_id }) = &result {
            tracing::error!(%owner_id, "refusing to create a second profile for account");
        }
        result?;

        tracing::info!(owner_id = %profile.owner_id, "created default profile");
        Ok(profile)
    }

    /// The profile owned by `account_id`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the account has no profile. Callers
    /// treat this as an empty state, not a failure.
    pub fn find_by_owner(&self, account_id: &str) -> Result<&Profile, StoreError> {
        let profiles = self.profiles.entries();
        locate(profiles, account_id)
            .and_then(|key| profiles.get(key))
            .ok_or_else(|| {
                tracing::debug!(%account_id, "no profile found for account");
                StoreError::NotFound {
                    owner_id: account_id.to_string(),
                }
            })
    }

    /// Replace every editable field of `account_id`'s profile with `fields`.
    ///
    /// The name is trimmed and the avatar regenerated from it (capped at
    /// `update_initials`; a blank name gets the placeholder initials).
    /// `owner_id` and `email` are preserved.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the account has no profile.
    pub fn update(
        &mut self,
        account_id: &str,
        mut fields: ProfileFields,
    ) -> Result<Profile, StoreError> {
        fields.name = fields.name.trim().to_string();
        let avatar_ref = self.avatar.for_update(&fields.name);

        let profile = self.profiles.mutate(|profiles| {
            let key = locate(profiles, account_id)
                .map(str::to_string)
                .ok_or_else(|| StoreError::NotFound {
                    owner_id: account_id.to_string(),
                })?;
            let profile = profiles
                .get_mut(&key)
                .ok_or_else(|| StoreError::NotFound {
                    owner_id: account_id.to_string(),
                })?;
            profile.apply(fields, avatar_ref);
            Ok(profile.clone())
        })?;

        tracing::info!(owner_id = %profile.owner_id, "updated profile");
        Ok(profile)
    }

    /// Every profile, in creation order.
    ///
    /// Account ids are fixed-width timestamps, so key order is creation order.
    #[must_use]
    pub fn list_all(&self) -> Vec<&Profile> {
        self.profiles.entries().values().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.entries().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.entries().is_empty()
    }

    /// Pick up profiles written by other instances since open.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the persisted mapping cannot be read.
    pub fn reload(&mut self) -> Result<(), StoreError> {
        self.profiles.reload()
    }
}
