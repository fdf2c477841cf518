//! Configuration map driving every generated artifact.

use serde::Deserialize;

use super::AppError;

/// Named configuration values written to `.env` and fed into templates.
///
/// Field order is the `.env` line order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationMap {
    pub front_api_url: String,
    pub api_key: String,
    pub db_host: String,
    pub db_port: String,
    pub db_database: String,
    pub db_username: String,
    pub db_password: String,
    pub types_url: String,
    pub main_api_url: String,
    /// Alias of `main_api_url` consumed by the front-end build.
    pub vite_app_api_url: String,
    pub generate_api: String,
}

impl ConfigurationMap {
    pub const DEFAULT_FRONT_API_URL: &'static str = "http://paste.localhost";
    pub const DEFAULT_MAIN_API_URL: &'static str = "http://share.localhost";

    /// Built-in defaults with the two secret fields supplied by the caller.
    pub fn with_secrets(api_key: String, db_password: String) -> Self {
        Self {
            front_api_url: Self::DEFAULT_FRONT_API_URL.to_string(),
            api_key,
            db_host: "db".to_string(),
            db_port: "5432".to_string(),
            db_database: "postgres".to_string(),
            db_username: "postgres".to_string(),
            db_password,
            types_url: "http://api:3000/docs-json".to_string(),
            main_api_url: Self::DEFAULT_MAIN_API_URL.to_string(),
            vite_app_api_url: Self::DEFAULT_MAIN_API_URL.to_string(),
            generate_api: "true".to_string(),
        }
    }

    /// Set the main API URL and its front-end alias together.
    pub fn set_main_api_url(&mut self, url: impl Into<String>) {
        let url = url.into();
        self.vite_app_api_url = url.clone();
        self.main_api_url = url;
    }

    /// `(KEY, value)` pairs in declaration order.
    pub fn entries(&self) -> [(&'static str, &str); 11] {
        [
            ("FRONT_API_URL", self.front_api_url.as_str()),
            ("API_KEY", self.api_key.as_str()),
            ("DB_HOST", self.db_host.as_str()),
            ("DB_PORT", self.db_port.as_str()),
            ("DB_DATABASE", self.db_database.as_str()),
            ("DB_USERNAME", self.db_username.as_str()),
            ("DB_PASSWORD", self.db_password.as_str()),
            ("TYPES_URL", self.types_url.as_str()),
            ("MAIN_API_URL", self.main_api_url.as_str()),
            ("VITE_APP_API_URL", self.vite_app_api_url.as_str()),
            ("GENERATE_API", self.generate_api.as_str()),
        ]
    }

    /// Apply settings-file overrides on top of the current values.
    pub fn apply_overrides(&mut self, overrides: &DefaultsOverride) {
        fn apply(target: &mut String, value: &Option<String>) {
            if let Some(value) = value {
                *target = value.clone();
            }
        }

        if let Some(url) = &overrides.main_api_url {
            self.set_main_api_url(url.as_str());
        }
        apply(&mut self.front_api_url, &overrides.front_api_url);
        apply(&mut self.api_key, &overrides.api_key);
        apply(&mut self.db_host, &overrides.db_host);
        apply(&mut self.db_port, &overrides.db_port);
        apply(&mut self.db_database, &overrides.db_database);
        apply(&mut self.db_username, &overrides.db_username);
        apply(&mut self.db_password, &overrides.db_password);
        apply(&mut self.types_url, &overrides.types_url);
        apply(&mut self.generate_api, &overrides.generate_api);
    }
}

/// Optional replacements for the built-in defaults, read from the `[defaults]`
/// table of a settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsOverride {
    pub main_api_url: Option<String>,
    pub front_api_url: Option<String>,
    pub api_key: Option<String>,
    pub db_host: Option<String>,
    pub db_port: Option<String>,
    pub db_database: Option<String>,
    pub db_username: Option<String>,
    pub db_password: Option<String>,
    pub types_url: Option<String>,
    pub generate_api: Option<String>,
}

impl DefaultsOverride {
    /// `(key, value)` pairs for every override that is set.
    fn provided(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("main_api_url", &self.main_api_url),
            ("front_api_url", &self.front_api_url),
            ("api_key", &self.api_key),
            ("db_host", &self.db_host),
            ("db_port", &self.db_port),
            ("db_database", &self.db_database),
            ("db_username", &self.db_username),
            ("db_password", &self.db_password),
            ("types_url", &self.types_url),
            ("generate_api", &self.generate_api),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|value| (key, value)))
    }

    /// Every value must fit on a single `.env` line.
    pub fn validate(&self) -> Result<(), AppError> {
        match self.provided().find(|(_, value)| value.contains(['\r', '\n'])) {
            Some((key, _)) => Err(AppError::config_error(format!(
                "Default '{key}' must not contain line breaks"
            ))),
            None => Ok(()),
        }
    }
}
