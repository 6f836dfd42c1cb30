//! Navigation targets for the directory views.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three sections the signed-in UI can switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavTarget {
    #[default]
    Profile,
    Alumni,
    Events,
}

impl NavTarget {
    pub const ALL: [Self; 3] = [Self::Profile, Self::Alumni, Self::Events];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Alumni => "alumni",
            Self::Events => "events",
        }
    }
}

impl fmt::Display for NavTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_matches_display() {
        for target in NavTarget::ALL {
            let json = serde_json::to_string(&target).expect("serialize");
            assert_eq!(json, format!("\"{target}\""));
        }
    }

    #[test]
    fn defaults_to_profile() {
        assert_eq!(NavTarget::default(), NavTarget::Profile);
    }
}
