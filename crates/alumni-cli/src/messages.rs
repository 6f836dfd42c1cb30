//! Banner and empty-state texts owned by the CLI.
//!
//! Store failures carry their own text (`StoreError::user_message`).

pub const REGISTERED: &str = "Account created and profile initialized!";
pub const LOGGED_IN: &str = "Logged in successfully!";
pub const PROFILE_UPDATED: &str = "Profile updated successfully!";
pub const EDIT_CANCELLED: &str = "Edit cancelled; profile not saved.";
pub const LOGGED_OUT: &str = "Logged out successfully.";

pub const LOGIN_REQUIRED: &str = "Please log in to update your profile.";

pub const NO_ALUMNI: &str = "No alumni profiles found yet.";
pub const NO_EVENTS: &str = "No upcoming events yet.";
