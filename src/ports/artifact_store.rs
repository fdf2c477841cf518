use std::path::Path;

use crate::domain::AppError;

/// Port for persisting generated artifacts.
pub trait ArtifactStore {
    /// Create a directory and its parents. Succeeds if it already exists.
    fn ensure_dir(&self, path: &Path) -> Result<(), AppError>;

    /// Write an artifact, replacing any previous content.
    fn write_artifact(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Remove an artifact left by a previous run. Returns true if one existed.
    fn remove_artifact(&self, path: &Path) -> Result<bool, AppError>;
}
