use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::ArtifactStore;

/// In-memory artifact store. Safe to share across the profile writer threads.
#[derive(Debug, Default)]
pub struct MemoryArtifactStore {
    files: Mutex<BTreeMap<PathBuf, String>>,
    dirs: Mutex<BTreeSet<PathBuf>>,
    failing: Mutex<BTreeSet<PathBuf>>,
}

impl MemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every write to `path` fail with `PermissionDenied`.
    pub fn fail_writes_to(&self, path: impl Into<PathBuf>) {
        self.failing.lock().unwrap().insert(path.into());
    }

    /// Place an artifact as if an earlier run had written it.
    pub fn seed(&self, path: impl Into<PathBuf>, content: &str) {
        self.files.lock().unwrap().insert(path.into(), content.to_string());
    }

    pub fn read(&self, path: &Path) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.lock().unwrap().keys().cloned().collect()
    }

    pub fn has_dir(&self, path: &Path) -> bool {
        self.dirs.lock().unwrap().contains(path)
    }
}

impl ArtifactStore for MemoryArtifactStore {
    fn ensure_dir(&self, path: &Path) -> Result<(), AppError> {
        let mut dirs = self.dirs.lock().unwrap();
        for ancestor in path.ancestors().filter(|p| !p.as_os_str().is_empty()) {
            dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }

    fn write_artifact(&self, path: &Path, content: &str) -> Result<(), AppError> {
        if self.failing.lock().unwrap().contains(path) {
            return Err(AppError::ArtifactWrite {
                path: path.display().to_string(),
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            });
        }
        let parent_exists = path.parent().is_none_or(|parent| {
            parent.as_os_str().is_empty() || self.dirs.lock().unwrap().contains(parent)
        });
        if !parent_exists {
            return Err(AppError::ArtifactWrite {
                path: path.display().to_string(),
                source: io::Error::from(io::ErrorKind::NotFound),
            });
        }
        self.files.lock().unwrap().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn remove_artifact(&self, path: &Path) -> Result<bool, AppError> {
        Ok(self.files.lock().unwrap().remove(path).is_some())
    }
}
