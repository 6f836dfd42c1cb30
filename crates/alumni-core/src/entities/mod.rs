//! Entity structs for the two persisted alumni records.
//!
//! Each entity maps to one value in a persisted mapping (see `alumni-store`).
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation. Field names are camelCase on the wire;
//! the legacy names written by earlier prototypes are accepted as aliases.

mod account;
mod profile;

pub use account::Account;
pub use profile::{Profile, ProfileFields};
