//! Optional settings file (`--config <file>`).
//!
//! ```toml
//! output_dir = "output"
//! templates_dir = "src-cfgs"
//!
//! [defaults]
//! main_api_url = "https://share.example.com"
//! db_host = "postgres"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::{AppError, DefaultsOverride};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SetupSettings {
    pub output_dir: Option<PathBuf>,
    pub templates_dir: Option<PathBuf>,
    #[serde(default)]
    pub defaults: DefaultsOverride,
}

impl SetupSettings {
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let settings: Self = toml::from_str(content)?;
        settings.defaults.validate()?;
        Ok(settings)
    }

    /// Resolve relative directories against `base` (the settings file's directory).
    pub fn relative_to(mut self, base: &Path) -> Self {
        let resolve = |path: PathBuf| if path.is_relative() { base.join(path) } else { path };
        self.output_dir = self.output_dir.map(resolve);
        self.templates_dir = self.templates_dir.map(resolve);
        self
    }
}
