//! Error handling for the strata application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for strata operations.
///
/// This enum represents all possible errors that can occur within the strata
/// application. It implements the standard Error trait through thiserror's
/// derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// A values file is missing or cannot be parsed as YAML
    #[error("cannot load values file '{path}': {reason}")]
    DocumentLoadError { path: String, reason: String },

    /// A values file does not contain a top-level mapping with string keys
    #[error("values file '{path}' must contain a top-level mapping with string keys")]
    InvalidConfigShape { path: String },

    /// The merged values document cannot be serialized back to YAML
    #[error("cannot serialize merged values: {0}")]
    SerializeError(#[from] serde_yaml::Error),

    /// A template file failed to render
    #[error("cannot render template '{path}': {source}")]
    TemplateRenderError { path: String, source: minijinja::Error },

    /// A macro file failed to load or evaluate
    #[error("cannot load macro file '{path}': {source}")]
    MacroLoadError { path: String, source: minijinja::Error },

    /// Represents errors raised by the template engine outside of file rendering
    #[error("template error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors that occur while walking or resolving template paths
    #[error("template processing error: {0}")]
    TemplateError(String),

    /// Represents errors in processing .strataignore files
    #[error("ignore file error: {0}")]
    IgnoreError(String),
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
