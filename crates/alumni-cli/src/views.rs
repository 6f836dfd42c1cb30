//! Read-only projections of controller state.
//!
//! Nothing here touches the stores; each view is rebuilt from scratch after
//! every event.

use alumni_core::avatar::AvatarStyle;
use alumni_core::entities::{Profile, ProfileFields};
use serde::Serialize;

use crate::context::Session;
use crate::messages;

const DEFAULT_WELCOME_NAME: &str = "Alumni";
const DEFAULT_CARD_NAME: &str = "Alumni Name";
const MISSING: &str = "N/A";

/// The signed-in user's own profile page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub welcome: String,
    pub user_id: String,
    pub avatar_url: String,
    #[serde(flatten)]
    pub fields: ProfileFields,
}

impl ProfileView {
    #[must_use]
    pub fn project(session: Option<&Session>, avatar: &AvatarStyle) -> Self {
        let profile = session.and_then(|s| s.profile.as_ref());

        let name = profile
            .map(|p| p.name.trim())
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_WELCOME_NAME);
        let user_id = session.map_or_else(
            || String::from("User ID: Not signed in"),
            |s| format!("User ID: {}", s.account_id()),
        );
        let avatar_ref = profile.map_or("", |p| p.avatar_ref.as_str());

        Self {
            welcome: format!("Welcome, {name}!"),
            user_id,
            avatar_url: avatar.display(avatar_ref).to_string(),
            fields: profile.map(Profile::fields).unwrap_or_default(),
        }
    }
}

/// One entry of the alumni directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlumniCard {
    pub name: String,
    pub current_role: String,
    pub institution: String,
    pub graduation_year: String,
    pub avatar_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
}

fn or_default(value: &str, default: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn link(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl AlumniCard {
    #[must_use]
    pub fn project(profile: &Profile, avatar: &AvatarStyle) -> Self {
        Self {
            name: or_default(&profile.name, DEFAULT_CARD_NAME),
            current_role: or_default(&profile.current_role, MISSING),
            institution: or_default(&profile.institution, MISSING),
            graduation_year: or_default(&profile.graduation_year, MISSING),
            avatar_url: avatar.display(&profile.avatar_ref).to_string(),
            linkedin_url: link(&profile.linkedin_url),
            github_url: link(&profile.github_url),
        }
    }
}

/// The alumni directory, in store order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlumniListView {
    pub total: usize,
    pub cards: Vec<AlumniCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty: Option<&'static str>,
}

impl AlumniListView {
    /// Cards for the first `limit` profiles; `total` counts all of them.
    #[must_use]
    pub fn project(profiles: &[&Profile], avatar: &AvatarStyle, limit: usize) -> Self {
        let cards = profiles
            .iter()
            .take(limit)
            .map(|profile| AlumniCard::project(profile, avatar))
            .collect::<Vec<_>>();
        let empty = profiles.is_empty().then_some(messages::NO_ALUMNI);
        Self {
            total: profiles.len(),
            cards,
            empty,
        }
    }
}

/// Events have no backing data; the view is always the empty state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventsView {
    pub empty: &'static str,
}

impl EventsView {
    #[must_use]
    pub const fn project() -> Self {
        Self {
            empty: messages::NO_EVENTS,
        }
    }
}
