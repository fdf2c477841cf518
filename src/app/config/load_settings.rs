//! Settings file loading and option resolution.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::paths::DEFAULT_OUTPUT_DIR;
use crate::domain::{AppError, DefaultsOverride, SetupPaths, SetupSettings};

/// Load a settings file. Relative directories inside it resolve against the
/// file's own directory.
pub fn load_settings(path: &Path) -> Result<SetupSettings, AppError> {
    let content = fs::read_to_string(path).map_err(|err| {
        if err.kind() == ErrorKind::NotFound {
            AppError::config_error(format!("Settings file not found: {}", path.display()))
        } else {
            AppError::Io(err)
        }
    })?;
    let settings = SetupSettings::parse(&content)?;
    debug!(path = %path.display(), "loaded settings file");

    let base = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(settings.relative_to(base))
}

/// Inputs for a setup run after merging flags, settings file and built-ins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSetup {
    pub paths: SetupPaths,
    /// `None` selects the embedded templates.
    pub templates_dir: Option<PathBuf>,
    pub defaults: DefaultsOverride,
}

/// Merge command-line values over an optional settings file.
///
/// Precedence: explicit flag, then settings file, then built-in default.
pub fn resolve_setup(
    output_dir: Option<PathBuf>,
    templates_dir: Option<PathBuf>,
    settings_file: Option<&Path>,
) -> Result<ResolvedSetup, AppError> {
    let settings = match settings_file {
        Some(path) => load_settings(path)?,
        None => SetupSettings::default(),
    };

    let output_root = output_dir
        .or(settings.output_dir)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    Ok(ResolvedSetup {
        paths: SetupPaths::new(output_root),
        templates_dir: templates_dir.or(settings.templates_dir),
        defaults: settings.defaults,
    })
}
