//! File ignore pattern handling for template directories.
//! Processes .strataignore files to exclude specific paths from rendering,
//! similar to .gitignore functionality.

use crate::error::{Error, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::{fs::read_to_string, path::Path};

/// strata's ignore file name, looked up in the template directory
pub const IGNORE_FILE: &str = ".strataignore";

/// Reads the template directory's ignore file into a set of glob patterns.
///
/// # Arguments
/// * `template_dir` - Directory that may contain a .strataignore file
///
/// # Returns
/// * `Result<GlobSet>` - Set of compiled glob patterns for path matching
///
/// # Notes
/// - If the ignore file doesn't exist, returns an empty GlobSet
/// - Blank lines and lines starting with '#' are skipped
/// - Invalid patterns result in an IgnoreError
///
/// # Example
/// ```ignore
/// # Contents of .strataignore:
/// partials/**
/// *.draft.j2
/// ```
pub fn parse_ignore_file<P: AsRef<Path>>(template_dir: P) -> Result<GlobSet> {
    let ignore_path = template_dir.as_ref().join(IGNORE_FILE);
    let mut builder = GlobSetBuilder::new();
    if let Ok(contents) = read_to_string(&ignore_path) {
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            builder.add(Glob::new(line).map_err(|e| {
                Error::IgnoreError(format!("{} loading failed: {}", IGNORE_FILE, e))
            })?);
        }
    } else {
        debug!("{} does not exist", IGNORE_FILE);
    }
    let glob_set = builder
        .build()
        .map_err(|e| Error::IgnoreError(format!("{} loading failed: {}", IGNORE_FILE, e)))?;

    Ok(glob_set)
}
