use std::collections::BTreeMap;

use crate::domain::AppError;
use crate::ports::TemplateSource;

/// Template source backed by a map of name to content.
#[derive(Debug, Clone, Default)]
pub struct MemoryTemplateSource {
    templates: BTreeMap<String, String>,
}

#[allow(dead_code)]
impl MemoryTemplateSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, content: &str) -> Self {
        self.templates.insert(name.to_string(), content.to_string());
        self
    }
}

impl TemplateSource for MemoryTemplateSource {
    fn load_template(&self, name: &str) -> Result<String, AppError> {
        self.templates
            .get(name)
            .cloned()
            .ok_or_else(|| AppError::TemplateNotFound { path: format!("<memory>/{name}") })
    }
}
