//! Minijinja-backed template rendering.
//!
//! Rendering is strict: a placeholder missing from the supplied values is an
//! error rather than an empty string. Block tags on their own line are trimmed
//! (`trim_blocks` + `lstrip_blocks`) so conditional sections in YAML templates
//! leave no blank or mis-indented lines behind, and the template's trailing
//! newline is kept.

use minijinja::{Environment, UndefinedBehavior, Value};

use crate::domain::{AppError, TemplateValues};

fn template_environment<'source>() -> Environment<'source> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    env
}

/// Render `template` with `values`. `name` is only used for error reporting.
pub fn render_template(
    name: &str,
    template: &str,
    values: &TemplateValues,
) -> Result<String, AppError> {
    let mut env = template_environment();
    env.add_template(name, template).map_err(|e| AppError::TemplateRender {
        template: name.to_string(),
        reason: e.to_string(),
    })?;

    let compiled = env.get_template(name).map_err(|e| AppError::TemplateRender {
        template: name.to_string(),
        reason: e.to_string(),
    })?;

    compiled.render(Value::from_serialize(values)).map_err(|e| AppError::TemplateRender {
        template: name.to_string(),
        reason: e.to_string(),
    })
}
