use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use include_dir::{Dir, include_dir};
use tracing::debug;

use crate::domain::AppError;
use crate::ports::TemplateSource;

static EMBEDDED_TEMPLATES: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Templates compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplateSource;

impl EmbeddedTemplateSource {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateSource for EmbeddedTemplateSource {
    fn load_template(&self, name: &str) -> Result<String, AppError> {
        let file = EMBEDDED_TEMPLATES
            .get_file(name)
            .ok_or_else(|| AppError::TemplateNotFound { path: format!("<embedded>/{name}") })?;
        let content = file.contents_utf8().ok_or_else(|| {
            AppError::config_error(format!("Embedded template is not UTF-8: {name}"))
        })?;
        debug!(template = name, "loaded embedded template");
        Ok(content.to_string())
    }
}

/// Templates read from a directory on disk.
#[derive(Debug, Clone)]
pub struct FilesystemTemplateSource {
    root: PathBuf,
}

impl FilesystemTemplateSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TemplateSource for FilesystemTemplateSource {
    fn load_template(&self, name: &str) -> Result<String, AppError> {
        let path = self.root.join(name);
        match fs::read_to_string(&path) {
            Ok(content) => {
                debug!(path = %path.display(), "loaded template");
                Ok(content)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Err(AppError::TemplateNotFound { path: path.display().to_string() })
            }
            Err(source) => Err(AppError::TemplateRead { path: path.display().to_string(), source }),
        }
    }
}

/// Template source selected at startup.
#[derive(Debug, Clone)]
pub enum TemplateSourceKind {
    Embedded(EmbeddedTemplateSource),
    Filesystem(FilesystemTemplateSource),
}

impl TemplateSourceKind {
    pub fn from_dir(dir: Option<PathBuf>) -> Self {
        match dir {
            Some(dir) => Self::Filesystem(FilesystemTemplateSource::new(dir)),
            None => Self::Embedded(EmbeddedTemplateSource::new()),
        }
    }
}

impl TemplateSource for TemplateSourceKind {
    fn load_template(&self, name: &str) -> Result<String, AppError> {
        match self {
            Self::Embedded(source) => source.load_template(name),
            Self::Filesystem(source) => source.load_template(name),
        }
    }
}
