use alumni_core::entities::{Account, Profile};
use schemars::{Schema, schema_for};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

/// JSON Schemas of the two persisted record types.
#[derive(Debug, Serialize)]
struct SchemaResponse {
    account: Schema,
    profile: Schema,
}

/// Handle `alumni schema`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = SchemaResponse {
        account: schema_for!(Account),
        profile: schema_for!(Profile),
    };
    output(&response, flags.format)
}
