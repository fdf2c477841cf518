//! Format checks applied to rendered artifacts before they are written.

use std::path::Path;

use crate::domain::AppError;

/// Expected format of a rendered artifact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArtifactFormat {
    /// Free-form text (`.env`, `Caddyfile`).
    Text,
    Yaml,
    Json,
}

/// Reject rendered content that does not parse as `format`.
pub fn validate_artifact(path: &Path, format: ArtifactFormat, content: &str) -> Result<(), AppError> {
    let invalid = |reason: String| AppError::InvalidArtifact { path: path.display().to_string(), reason };

    match format {
        ArtifactFormat::Text => Ok(()),
        ArtifactFormat::Yaml => serde_yaml::from_str::<serde_yaml::Value>(content)
            .map(|_| ())
            .map_err(|e| invalid(e.to_string())),
        ArtifactFormat::Json => serde_json::from_str::<serde_json::Value>(content)
            .map(|_| ())
            .map_err(|e| invalid(e.to_string())),
    }
}
