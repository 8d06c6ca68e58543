//! Template rendering functionality backed by MiniJinja.
//! The environment resolves template names against the template directory
//! first and the macro directory second, so includes and imports keep working
//! from either location.

use crate::context::Context;
use crate::error::{Error, Result};
use minijinja::{context, path_loader, Environment, UndefinedBehavior, Value};
use std::path::Path;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &Context) -> Result<String>;

    /// Renders a template resolved through the environment loader.
    fn render_named(&self, name: &str, context: &Context) -> Result<String>;

    /// Returns the macros and top-level variables a loaded template exports.
    fn exports(&self, name: &str) -> Result<Vec<(String, Value)>>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer over a template and a macro directory.
    ///
    /// Undefined variables fail the render; block tags consume the newline
    /// that follows them.
    pub fn new(templates_dir: &Path, macros_dir: &Path) -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);

        let templates = path_loader(templates_dir);
        let macros = path_loader(macros_dir);
        env.set_loader(move |name| match templates(name)? {
            Some(source) => Ok(Some(source)),
            None => macros(name),
        });

        Self { env }
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if parsing or rendering fails
    fn render(&self, template: &str, context: &Context) -> Result<String> {
        self.env.render_str(template, context).map_err(Error::MinijinjaError)
    }

    /// Renders a template file registered with the environment loader.
    ///
    /// # Errors
    /// * `Error::TemplateRenderError` if the template cannot be loaded or
    ///   rendered; the template path is retained
    fn render_named(&self, name: &str, context: &Context) -> Result<String> {
        let template = self.env.get_template(name).map_err(|e| Error::TemplateRenderError {
            path: name.to_string(),
            source: e,
        })?;

        template.render(context).map_err(|e| Error::TemplateRenderError {
            path: name.to_string(),
            source: e,
        })
    }

    /// Evaluates a loaded template and collects its exports.
    ///
    /// Macros defined with `{% macro %}` and variables set at the top level
    /// both count as exports; the returned values stay callable when inserted
    /// into another template's context.
    fn exports(&self, name: &str) -> Result<Vec<(String, Value)>> {
        let template = self.env.get_template(name).map_err(|e| Error::MacroLoadError {
            path: name.to_string(),
            source: e,
        })?;
        let state = template.eval_to_state(context! {}).map_err(|e| Error::MacroLoadError {
            path: name.to_string(),
            source: e,
        })?;

        let mut exports = Vec::new();
        for export in state.exports() {
            if let Some(value) = state.lookup(export) {
                exports.push((export.to_string(), value));
            }
        }
        Ok(exports)
    }
}
