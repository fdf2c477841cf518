//! API Facade for the application.
//!
//! Wires the production adapters into an `AppContext` and runs the setup
//! pipeline.

use std::path::PathBuf;

use crate::app::config::resolve_setup;
use crate::app::{AppContext, commands::setup};
use crate::services::{
    FilesystemArtifactStore, PrompterKind, RandomSecretGenerator, TemplateSourceKind,
};

pub use crate::app::commands::setup::SetupOutcome;
pub use crate::domain::AppError;

/// Options for a setup run. Unset values fall back to the settings file,
/// then to built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct SetupOptions {
    /// Output root directory.
    pub output_dir: Option<PathBuf>,
    /// Directory containing `Caddyfile`, `docker-compose.yaml` and `sxcu/`.
    /// Embedded templates are used when unset.
    pub templates_dir: Option<PathBuf>,
    /// Optional TOML settings file.
    pub settings_file: Option<PathBuf>,
    /// Answer every question with its default instead of prompting.
    pub accept_defaults: bool,
}

/// Run the setup wizard and write every artifact.
pub fn setup(options: SetupOptions) -> Result<SetupOutcome, AppError> {
    let resolved = resolve_setup(
        options.output_dir,
        options.templates_dir,
        options.settings_file.as_deref(),
    )?;

    let ctx = AppContext::new(
        PrompterKind::new(options.accept_defaults),
        FilesystemArtifactStore::new(),
        TemplateSourceKind::from_dir(resolved.templates_dir),
        RandomSecretGenerator::new(),
    );

    setup::execute(&ctx, &resolved.paths, &resolved.defaults)
}
