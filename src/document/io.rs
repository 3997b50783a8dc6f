use std::fs;
use std::path::Path;

use super::model::WorkflowDocument;
use crate::error::MigrationError;

/// Reads and parses a workflow document from a JSON file.
pub fn load_workflow(path: impl AsRef<Path>) -> Result<WorkflowDocument, MigrationError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| MigrationError::Read {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| MigrationError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

/// Serializes a workflow document to a JSON file, pretty-printed with a
/// trailing newline. Non-ASCII text passes through unescaped.
pub fn save_workflow(
    path: impl AsRef<Path>,
    document: &WorkflowDocument,
) -> Result<(), MigrationError> {
    let path = path.as_ref();
    let mut json = serde_json::to_string_pretty(document).map_err(MigrationError::Serialize)?;
    json.push('\n');
    fs::write(path, json).map_err(|e| MigrationError::Write {
        path: path.display().to_string(),
        source: e,
    })
}
