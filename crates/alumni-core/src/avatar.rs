//! Derived avatars.
//!
//! A profile's avatar is a placeholder image whose text is the owner's
//! initials. The reference is computed when the profile is saved and stored
//! with it, so it always reflects the name at last save.

/// Placeholder image service; the initials are appended as the `text` query value.
pub const DEFAULT_BASE_URL: &str = "https://placehold.co/150x150/e2e8f0/64748b?text=";

/// Text shown on the fallback image when a profile has no avatar.
pub const FALLBACK_TEXT: &str = "No+Photo";

/// Initials cap used when the avatar is generated at registration.
pub const REGISTRATION_INITIALS: usize = 2;

/// Initials cap used when the avatar is regenerated on profile update.
pub const UPDATE_INITIALS: usize = 3;

/// Placeholder initials for a profile saved with a blank name.
pub const EMPTY_NAME_INITIALS: &str = "NA";

/// First character of every whitespace-separated token, uppercased,
/// truncated to `max_len` characters.
///
/// Empty or whitespace-only input yields an empty string.
#[must_use]
pub fn initials(name: &str, max_len: usize) -> String {
    let firsts: String = name
        .split_whitespace()
        .filter_map(|token| token.chars().next())
        .collect();
    firsts.to_uppercase().chars().take(max_len).collect()
}

/// How avatar references are built and displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarStyle {
    pub base_url: String,
    pub fallback_url: String,
    pub registration_initials: usize,
    pub update_initials: usize,
    pub empty_name_initials: String,
}

impl Default for AvatarStyle {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            fallback_url: format!("{DEFAULT_BASE_URL}{FALLBACK_TEXT}"),
            registration_initials: REGISTRATION_INITIALS,
            update_initials: UPDATE_INITIALS,
            empty_name_initials: EMPTY_NAME_INITIALS.to_string(),
        }
    }
}

impl AvatarStyle {
    /// Image URL showing the given initials.
    #[must_use]
    pub fn url(&self, initials: &str) -> String {
        format!("{}{}", self.base_url, urlencoding::encode(initials))
    }

    /// Avatar for a freshly registered account, derived from the email local part.
    ///
    /// Returns an empty reference when the local part has no initials; views
    /// substitute [`AvatarStyle::fallback_url`] for it.
    #[must_use]
    pub fn for_registration(&self, local_part: &str) -> String {
        let initials = initials(local_part, self.registration_initials);
        if initials.is_empty() {
            return String::new();
        }
        self.url(&initials)
    }

    /// Avatar for a profile saved with `name`.
    #[must_use]
    pub fn for_update(&self, name: &str) -> String {
        let initials = initials(name, self.update_initials);
        if initials.is_empty() {
            self.url(&self.empty_name_initials)
        } else {
            self.url(&initials)
        }
    }

    /// The image to display for a stored reference.
    #[must_use]
    pub fn display<'a>(&'a self, avatar_ref: &'a str) -> &'a str {
        if avatar_ref.is_empty() {
            &self.fallback_url
        } else {
            avatar_ref
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("jane.doe", 2, "J")]
    #[case("Ada Lovelace", 3, "AL")]
    #[case("ada lovelace", 3, "AL")]
    #[case("grace brewster murray hopper", 3, "GBM")]
    #[case("grace brewster murray hopper", 2, "GB")]
    #[case("  spaced   out  ", 3, "SO")]
    #[case("", 3, "")]
    #[case("   ", 2, "")]
    #[case("émile zola", 2, "ÉZ")]
    fn derives_initials(#[case] name: &str, #[case] max: usize, #[case] expected: &str) {
        assert_eq!(initials(name, max), expected);
    }

    #[test]
    fn registration_avatar_uses_two_initials() {
        let style = AvatarStyle::default();
        assert_eq!(
            style.for_registration("mary ann"),
            format!("{DEFAULT_BASE_URL}MA")
        );
        assert_eq!(
            style.for_registration("jane.doe"),
            format!("{DEFAULT_BASE_URL}J")
        );
    }

    #[test]
    fn registration_avatar_is_empty_without_initials() {
        let style = AvatarStyle::default();
        assert_eq!(style.for_registration(""), "");
        assert_eq!(style.display(""), style.fallback_url);
    }

    #[test]
    fn update_avatar_falls_back_to_placeholder_initials() {
        let style = AvatarStyle::default();
        assert_eq!(style.for_update(""), format!("{DEFAULT_BASE_URL}NA"));
        assert_eq!(
            style.for_update("Ada Lovelace"),
            format!("{DEFAULT_BASE_URL}AL")
        );
    }

    #[test]
    fn url_escapes_reserved_characters() {
        let style = AvatarStyle::default();
        assert_eq!(style.url("#&"), format!("{DEFAULT_BASE_URL}%23%26"));
    }

    #[test]
    fn display_keeps_stored_reference() {
        let style = AvatarStyle::default();
        assert_eq!(style.display("https://example.com/a.png"), "https://example.com/a.png");
    }

    #[test]
    fn default_fallback_points_at_no_photo_placeholder() {
        let style = AvatarStyle::default();
        assert!(style.fallback_url.ends_with("text=No+Photo"));
    }
}
