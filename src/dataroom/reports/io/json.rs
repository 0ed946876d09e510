use std::fs;
use std::path::Path;

use crate::dataroom::reports::error::Result;
use crate::dataroom::reports::model::ProjectExport;

/// Loads an assembled project tree from a JSON document on disk.
///
/// Structural problems (missing required keys, malformed identifiers or
/// timestamps, unknown role values) surface as deserialization errors here;
/// semantically empty required fields are caught later by the report builder.
pub fn load_project(path: &Path) -> Result<ProjectExport> {
    let source = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&source)?)
}
