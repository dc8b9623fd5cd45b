use crate::utils::error::{DemoError, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

pub const SEGMENT_SEPARATOR: &str = "/";

/// Replaces one `/`-separated segment of a string field and stores the
/// re-joined string back into `json`. Returns the new field value.
pub fn replace_segment(
    json: &mut Value,
    field: &str,
    index: usize,
    replacement: &str,
) -> Result<String> {
    let object = json
        .as_object_mut()
        .ok_or_else(|| DemoError::ProcessingError {
            message: "top-level JSON value must be an object".to_string(),
        })?;

    let current = match object.get(field) {
        Some(Value::String(s)) => s,
        Some(other) => {
            return Err(DemoError::ProcessingError {
                message: format!("field '{}' must be a string, found {}", field, other),
            })
        }
        None => {
            return Err(DemoError::ProcessingError {
                message: format!("field '{}' not found", field),
            })
        }
    };

    let mut parts: Vec<&str> = current.split(SEGMENT_SEPARATOR).collect();
    let segment_count = parts.len();
    let slot = parts.get_mut(index).ok_or_else(|| DemoError::ProcessingError {
        message: format!(
            "segment {} out of range for '{}' ({} segments)",
            index, field, segment_count
        ),
    })?;
    *slot = replacement;

    let updated = parts.join(SEGMENT_SEPARATOR);
    tracing::debug!("{}: segment {} -> {}", field, index, replacement);
    object.insert(field.to_string(), Value::String(updated.clone()));
    Ok(updated)
}

/// Reads `path`, patches the field and overwrites the file in place.
pub fn patch_file(path: &Path, field: &str, index: usize, replacement: &str) -> Result<String> {
    let content = fs::read_to_string(path)?;
    let mut json: Value = serde_json::from_str(&content)?;

    let updated = replace_segment(&mut json, field, index, replacement)?;

    fs::write(path, serde_json::to_string(&json)?)?;
    tracing::info!("📝 Updated {} in {}", field, path.display());
    Ok(updated)
}
