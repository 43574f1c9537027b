use crate::domain::model::RenderContext;
use crate::utils::error::{GenError, Result};
use minijinja::Environment;

/// Jinja-compatible string templating over a [`RenderContext`].
///
/// Undefined lookups render as empty strings and a single trailing newline in
/// the template source is dropped, both matching Jinja2 defaults.
pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    pub fn new() -> Self {
        Self {
            env: Environment::new(),
        }
    }

    pub fn render(&self, name: &str, source: &str, context: &RenderContext) -> Result<String> {
        self.env
            .render_named_str(name, source, context)
            .map_err(|source| GenError::RenderError {
                name: name.to_string(),
                source,
            })
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}
