use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::ScaffoldError;

/// Merge `scripts` into the package.json under `project_root`.
///
/// Entries the init step already wrote (such as `test`) are kept; entries
/// in `scripts` win on collision. Top-level key order is preserved, with a
/// `scripts` table appended only if the init step did not write one.
pub fn add_scripts(project_root: &Path, scripts: &[(&str, &str)]) -> Result<(), ScaffoldError> {
    let path = project_root.join("package.json");

    let content = fs::read_to_string(&path).map_err(|e| ScaffoldError::Manifest {
        path: path.clone(),
        detail: format!("cannot read package.json: {e}"),
    })?;

    let mut manifest: Value =
        serde_json::from_str(&content).map_err(|e| ScaffoldError::Manifest {
            path: path.clone(),
            detail: format!("package.json is not valid JSON: {e}"),
        })?;

    let root = manifest
        .as_object_mut()
        .ok_or_else(|| ScaffoldError::Manifest {
            path: path.clone(),
            detail: "package.json is not a JSON object".to_string(),
        })?;

    let table = root
        .entry("scripts")
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| ScaffoldError::Manifest {
            path: path.clone(),
            detail: "the scripts field is not a JSON object".to_string(),
        })?;

    for (name, command) in scripts {
        table.insert((*name).to_string(), Value::String((*command).to_string()));
    }

    let mut rendered =
        serde_json::to_string_pretty(&manifest).map_err(|e| ScaffoldError::Manifest {
            path: path.clone(),
            detail: format!("cannot serialize package.json: {e}"),
        })?;
    rendered.push('\n');

    fs::write(&path, rendered)?;
    Ok(())
}
