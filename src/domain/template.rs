use std::collections::BTreeMap;

use serde::Serialize;

use super::ConfigurationMap;

/// Values exposed to a template, keyed by placeholder name.
///
/// A `None` value is defined but falsy, so `{% if port %}` blocks can drop out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TemplateValues {
    values: BTreeMap<String, Option<String>>,
}

impl TemplateValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), Some(value.into()));
        self
    }

    pub fn with_optional<V: ToString>(mut self, name: impl Into<String>, value: Option<V>) -> Self {
        self.values.insert(name.into(), value.map(|v| v.to_string()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(|value| value.as_deref())
    }

    /// `{mainApiUrl, frontApiUrl}` for the reverse-proxy config.
    pub fn proxy(config: &ConfigurationMap) -> Self {
        Self::new()
            .with("mainApiUrl", config.main_api_url.as_str())
            .with("frontApiUrl", config.front_api_url.as_str())
    }

    /// `{mainApiUrl, frontApiUrl, apiKey}` for upload profiles.
    pub fn profile(config: &ConfigurationMap) -> Self {
        Self::proxy(config).with("apiKey", config.api_key.as_str())
    }

    /// `{port}` for the compose file.
    pub fn compose(port: Option<u16>) -> Self {
        Self::new().with_optional("port", port)
    }
}
