//! Template directory processing.
//! Walks the template tree, renders each template file against the merged
//! context, and writes the results into the output directory preserving the
//! relative layout.

use crate::context::Context;
use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;
use globset::GlobSet;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Returns true when the path names a renderable template file.
pub fn is_template_path(path: &str) -> bool {
    Path::new(path).extension().map_or(false, |ext| ext == "j2")
}

/// Maps a template-relative path to its output location, stripping the
/// template extension from the filename.
pub fn resolve_target_path(relative_path: &str, output_dir: &Path) -> PathBuf {
    let stripped = relative_path.strip_suffix(".j2").unwrap_or(relative_path);
    output_dir.join(stripped)
}

/// Clears and recreates the output directory.
/// Every run produces the full rendered tree from scratch, so stale files
/// from a previous invocation never survive.
pub fn prepare_output_dir(output_dir: &Path) -> Result<()> {
    if output_dir.exists() {
        fs::remove_dir_all(output_dir).map_err(Error::IoError)?;
    }
    fs::create_dir_all(output_dir).map_err(Error::IoError)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    let base_path = std::env::current_dir().unwrap_or_default();
    let abs_path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_path.join(path)
    };

    if let Some(parent) = abs_path.parent() {
        fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    fs::write(abs_path, content).map_err(Error::IoError)
}

/// Renders every template file under `template_dir` into `output_dir`.
///
/// # Arguments
/// * `engine` - Template rendering engine
/// * `template_dir` - Directory holding the template tree
/// * `output_dir` - Directory receiving rendered files
/// * `context` - Variable context for rendering
/// * `ignored` - Glob patterns excluded from rendering
///
/// # Behavior
/// Only files carrying the template extension are rendered; everything else
/// is skipped. The first render failure aborts the pass with the offending
/// template path retained.
pub fn process_templates(
    engine: &dyn TemplateRenderer,
    template_dir: &Path,
    output_dir: &Path,
    context: &Context,
    ignored: &GlobSet,
) -> Result<()> {
    prepare_output_dir(output_dir)?;

    for entry in WalkDir::new(template_dir).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::TemplateError(e.to_string()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative_path = entry
            .path()
            .strip_prefix(template_dir)
            .map_err(|e| Error::TemplateError(e.to_string()))?;
        let relative_path = relative_path.to_str().ok_or_else(|| {
            Error::TemplateError(format!("invalid path: '{}'", entry.path().display()))
        })?;

        if ignored.is_match(relative_path) {
            debug!("Skipping ignored file '{}'", relative_path);
            continue;
        }
        if !is_template_path(relative_path) {
            debug!("Skipping non-template file '{}'", relative_path);
            continue;
        }

        let rendered = engine.render_named(relative_path, context)?;
        let target_path = resolve_target_path(relative_path, output_dir);
        write_file(&target_path, &rendered)?;
        info!("Rendered '{}' to '{}'", relative_path, target_path.display());
    }

    Ok(())
}
