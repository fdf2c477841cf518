use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::domain::AppError;
use crate::ports::ArtifactStore;

/// Filesystem-based artifact store.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemArtifactStore;

impl FilesystemArtifactStore {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactStore for FilesystemArtifactStore {
    fn ensure_dir(&self, path: &Path) -> Result<(), AppError> {
        fs::create_dir_all(path).map_err(|source| AppError::DirectoryCreate {
            path: path.display().to_string(),
            source,
        })
    }

    fn write_artifact(&self, path: &Path, content: &str) -> Result<(), AppError> {
        fs::write(path, content).map_err(|source| AppError::ArtifactWrite {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), bytes = content.len(), "wrote artifact");
        Ok(())
    }

    fn remove_artifact(&self, path: &Path) -> Result<bool, AppError> {
        match fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(source) => {
                Err(AppError::ArtifactWrite { path: path.display().to_string(), source })
            }
        }
    }
}
