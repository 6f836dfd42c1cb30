use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A directory entry. Keyed by `owner_id` in the profiles mapping.
///
/// `owner_id` and `email` identify the owning account and survive every
/// update; the remaining fields are replaced wholesale by [`Profile::apply`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(alias = "userId")]
    pub owner_id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub graduation_year: String,
    #[serde(default)]
    pub current_role: String,
    #[serde(default, alias = "linkedin")]
    pub linkedin_url: String,
    #[serde(default, alias = "github")]
    pub github_url: String,
    /// Avatar image reference derived from the name at last save.
    #[serde(default, alias = "avatar")]
    pub avatar_ref: String,
}

/// The editable part of a profile, as submitted by the profile form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub graduation_year: String,
    #[serde(default)]
    pub current_role: String,
    #[serde(default)]
    pub linkedin_url: String,
    #[serde(default)]
    pub github_url: String,
}

impl Profile {
    /// Snapshot the editable fields (used to pre-fill the edit form).
    #[must_use]
    pub fn fields(&self) -> ProfileFields {
        ProfileFields {
            name: self.name.clone(),
            institution: self.institution.clone(),
            graduation_year: self.graduation_year.clone(),
            current_role: self.current_role.clone(),
            linkedin_url: self.linkedin_url.clone(),
            github_url: self.github_url.clone(),
        }
    }

    /// Replace every editable field and the avatar, keeping identity fields.
    pub fn apply(&mut self, fields: ProfileFields, avatar_ref: String) {
        let ProfileFields {
            name,
            institution,
            graduation_year,
            current_role,
            linkedin_url,
            github_url,
        } = fields;
        self.name = name;
        self.institution = institution;
        self.graduation_year = graduation_year;
        self.current_role = current_role;
        self.linkedin_url = linkedin_url;
        self.github_url = github_url;
        self.avatar_ref = avatar_ref;
    }
}
