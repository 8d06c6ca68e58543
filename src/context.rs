//! Rendering context assembly.
//! Builds the variable context handed to the template engine from the merged
//! values document, then injects macro exports so templates can call them
//! without an explicit import.

use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;
use crate::values::Document;
use indexmap::IndexMap;
use log::debug;
use minijinja::Value;
use std::fs;
use std::path::Path;

/// Variable context passed to template rendering.
/// Insertion order is kept so repeated runs resolve identically.
pub type Context = IndexMap<String, Value>;

/// Builds the initial rendering context from the merged values document.
///
/// # Errors
/// * `Error::TemplateError` if a top-level key is not a string
pub fn build_context(merged: &Document) -> Result<Context> {
    let mut context = Context::new();
    for (key, value) in merged {
        let key = key.as_str().ok_or_else(|| {
            Error::TemplateError(format!("non-string top-level key in merged values: {:?}", key))
        })?;
        context.insert(key.to_string(), Value::from_serialize(value));
    }
    Ok(context)
}

/// Evaluates each macro file directly under `macros_dir` and inserts its
/// exports into the context. Files are visited in name order, so a later file
/// wins when two export the same name. Exports starting with an underscore
/// stay private to their macro file.
///
/// A missing macro directory is not an error; rendering proceeds without
/// injected macros.
pub fn inject_macros(
    engine: &dyn TemplateRenderer,
    macros_dir: &Path,
    context: &mut Context,
) -> Result<()> {
    if !macros_dir.is_dir() {
        debug!("Macro directory '{}' does not exist, skipping", macros_dir.display());
        return Ok(());
    }

    let mut macro_files = Vec::new();
    for entry in fs::read_dir(macros_dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().map_or(false, |ext| ext == "j2") {
            macro_files.push(path);
        }
    }
    macro_files.sort();

    for path in macro_files {
        let name = path.file_name().and_then(|n| n.to_str()).ok_or_else(|| {
            Error::TemplateError(format!("invalid macro file name: '{}'", path.display()))
        })?;

        for (export, value) in engine.exports(name)? {
            if export.starts_with('_') {
                debug!("Skipping private export '{}' from '{}'", export, name);
                continue;
            }
            debug!("Registering macro '{}' from '{}'", export, name);
            context.insert(export, value);
        }
    }

    Ok(())
}
