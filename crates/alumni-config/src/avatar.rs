//! Avatar placeholder configuration.

use alumni_core::avatar::{
    AvatarStyle, DEFAULT_BASE_URL, EMPTY_NAME_INITIALS, FALLBACK_TEXT, REGISTRATION_INITIALS,
    UPDATE_INITIALS,
};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_registration_initials() -> usize {
    REGISTRATION_INITIALS
}

const fn default_update_initials() -> usize {
    UPDATE_INITIALS
}

fn default_empty_name_initials() -> String {
    EMPTY_NAME_INITIALS.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AvatarConfig {
    /// Placeholder image URL; initials are appended to it.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Image shown for profiles without an avatar.
    /// Empty means `{base_url}No+Photo`.
    #[serde(default)]
    pub fallback_url: String,

    #[serde(default = "default_registration_initials")]
    pub registration_initials: usize,

    #[serde(default = "default_update_initials")]
    pub update_initials: usize,

    /// Initials used when a profile is saved with a blank name.
    #[serde(default = "default_empty_name_initials")]
    pub empty_name_initials: String,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            fallback_url: String::new(),
            registration_initials: default_registration_initials(),
            update_initials: default_update_initials(),
            empty_name_initials: default_empty_name_initials(),
        }
    }
}

impl AvatarConfig {
    /// Build the avatar style used by the profile store and views.
    #[must_use]
    pub fn style(&self) -> AvatarStyle {
        let fallback_url = if self.fallback_url.is_empty() {
            format!("{}{FALLBACK_TEXT}", self.base_url)
        } else {
            self.fallback_url.clone()
        };
        AvatarStyle {
            base_url: self.base_url.clone(),
            fallback_url,
            registration_initials: self.registration_initials,
            update_initials: self.update_initials,
            empty_name_initials: self.empty_name_initials.clone(),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.registration_initials == 0 {
            return Err(ConfigError::InvalidValue {
                field: "avatar.registration_initials".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.update_initials == 0 {
            return Err(ConfigError::InvalidValue {
                field: "avatar.update_initials".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_style_matches_core_default() {
        assert_eq!(AvatarConfig::default().style(), AvatarStyle::default());
    }

    #[test]
    fn fallback_follows_custom_base_url() {
        let config = AvatarConfig {
            base_url: "https://img.example/?t=".into(),
            ..AvatarConfig::default()
        };
        assert_eq!(config.style().fallback_url, "https://img.example/?t=No+Photo");
    }

    #[test]
    fn zero_initials_cap_is_rejected() {
        let config = AvatarConfig {
            update_initials: 0,
            ..AvatarConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "avatar.update_initials"
        ));
    }
}
