//! Output layout and template names.

use std::path::{Path, PathBuf};

use super::UploadProfile;

/// Template name of the reverse-proxy config.
pub const CADDYFILE_TEMPLATE: &str = "Caddyfile";

/// Template name of the compose file.
pub const COMPOSE_TEMPLATE: &str = "docker-compose.yaml";

/// Directory holding the upload profile templates.
pub const PROFILES_TEMPLATE_DIR: &str = "sxcu";

/// Default output root, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Template name of an upload profile, e.g. `sxcu/image.sxcu`.
pub fn profile_template(profile: UploadProfile) -> String {
    format!("{}/{}", PROFILES_TEMPLATE_DIR, profile.file_name())
}

/// Every output location of a setup run, derived from a single root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupPaths {
    output_root: PathBuf,
}

impl SetupPaths {
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self { output_root: output_root.into() }
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// `<root>/.env`
    pub fn env_file(&self) -> PathBuf {
        self.output_root.join(".env")
    }

    /// `<root>/docker/caddy`
    pub fn caddy_dir(&self) -> PathBuf {
        self.output_root.join("docker").join("caddy")
    }

    /// `<root>/docker/caddy/Caddyfile`
    pub fn caddyfile(&self) -> PathBuf {
        self.caddy_dir().join("Caddyfile")
    }

    /// `<root>/docker-compose.yaml`
    pub fn compose_file(&self) -> PathBuf {
        self.output_root.join("docker-compose.yaml")
    }

    /// `<root>/sxcu`
    pub fn profiles_dir(&self) -> PathBuf {
        self.output_root.join(PROFILES_TEMPLATE_DIR)
    }

    /// `<root>/sxcu/<name>.sxcu`
    pub fn profile(&self, profile: UploadProfile) -> PathBuf {
        self.profiles_dir().join(profile.file_name())
    }

    /// Directories that must exist before any artifact is written.
    pub fn required_dirs(&self) -> [PathBuf; 2] {
        [self.caddy_dir(), self.profiles_dir()]
    }
}

impl Default for SetupPaths {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}
