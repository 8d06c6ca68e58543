//! Strata renders directories of MiniJinja templates against layered YAML
//! values files, producing Terraform configuration from a single merged
//! context.

/// Command-line interface module for the strata application
pub mod cli;

/// Rendering context assembly and macro injection
pub mod context;

/// Error types and handling for the strata application
pub mod error;

/// File ignore patterns
/// Processes .strataignore files to exclude specific paths from rendering
pub mod ignore;

/// Template directory processing
/// Walks the template tree and writes rendered output
pub mod processor;

/// Template rendering functionality backed by MiniJinja
pub mod renderer;

/// Values document loading and deep merging
pub mod values;
