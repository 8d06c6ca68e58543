//! Values document loading and deep merging.
//! A run layers one base document and any number of override documents into a
//! single mapping that becomes the template rendering context.

use crate::error::{Error, Result};
use log::debug;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// A single layer of configuration values: a YAML mapping with string keys.
/// Key order follows the source file.
pub type Document = Mapping;

/// Loads a values document from a YAML file.
///
/// # Arguments
/// * `path` - Path to the YAML file
///
/// # Returns
/// * `Result<Document>` - The parsed top-level mapping
///
/// # Errors
/// * `Error::DocumentLoadError` if the file is missing or not valid YAML
/// * `Error::InvalidConfigShape` if the top level is not a mapping with
///   string keys
///
/// # Notes
/// An empty file parses as YAML null and loads as an empty mapping.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    debug!("Loading values from '{}'", path.display());

    let content = fs::read_to_string(path).map_err(|e| Error::DocumentLoadError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let value: Value = serde_yaml::from_str(&content).map_err(|e| Error::DocumentLoadError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    match value {
        Value::Null => Ok(Document::new()),
        Value::Mapping(mapping) => {
            if mapping.keys().any(|key| !key.is_string()) {
                return Err(Error::InvalidConfigShape {
                    path: path.display().to_string(),
                });
            }
            Ok(mapping)
        }
        _ => Err(Error::InvalidConfigShape { path: path.display().to_string() }),
    }
}

/// Loads override documents in the order they were given on the command line.
pub fn load_documents<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Document>> {
    paths.iter().map(|path| load_document(path)).collect()
}

/// Produces the fully layered configuration without mutating any input.
/// Overrides apply left to right; later documents win over earlier ones,
/// which win over the base.
pub fn merge(base: &Document, overrides: &[Document]) -> Document {
    let mut merged = base.clone();
    for overlay in overrides {
        merge_into(&mut merged, overlay);
    }
    merged
}

/// Recursively merges `overlay` into `accumulator`.
/// Shared mapping-valued keys merge key by key; any other collision is
/// replaced wholesale by the overlay value, sequences included.
pub fn merge_into(accumulator: &mut Document, overlay: &Document) {
    for (key, value) in overlay {
        match accumulator.get_mut(key) {
            Some(existing) => merge_value(existing, value),
            None => {
                accumulator.insert(key.clone(), value.clone());
            }
        }
    }
}

fn merge_value(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(key) {
                    Some(existing) => merge_value(existing, value),
                    None => {
                        base_map.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (base, overlay) => *base = overlay.clone(),
    }
}

/// Writes the merged document to a YAML file for auditing.
/// Keys keep their merge order; nothing is sorted.
pub fn write_document<P: AsRef<Path>>(path: P, document: &Document) -> Result<()> {
    let path = path.as_ref();
    let content = serde_yaml::to_string(document)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(Error::IoError)?;
        }
    }
    fs::write(path, content).map_err(Error::IoError)
}
