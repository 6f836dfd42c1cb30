mod profile;

pub use profile::{ProfileCommands, ProfileShowArgs, ProfileUpdateArgs};
