use std::io;

use thiserror::Error;

/// Library-wide error type for sxcu-setup operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Settings file could not be parsed.
    #[error("Failed to parse settings file: {0}")]
    SettingsParse(#[from] toml::de::Error),

    /// Template source file does not exist.
    #[error("Template not found: {path}")]
    TemplateNotFound { path: String },

    /// Template source exists but could not be read.
    #[error("Failed to read template {path}: {source}")]
    TemplateRead {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Template failed to compile or referenced an undefined value.
    #[error("Failed to render template '{template}': {reason}")]
    TemplateRender { template: String, reason: String },

    /// Rendered artifact is not valid for its format.
    #[error("Generated artifact {path} is invalid: {reason}")]
    InvalidArtifact { path: String, reason: String },

    /// Output directory could not be created.
    #[error("Failed to create directory {path}: {source}")]
    DirectoryCreate {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Output artifact could not be written or removed.
    #[error("Failed to write {path}: {source}")]
    ArtifactWrite {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// User interrupted an interactive prompt.
    #[error("Setup cancelled")]
    PromptCancelled,
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::TemplateRead { source, .. }
            | AppError::DirectoryCreate { source, .. }
            | AppError::ArtifactWrite { source, .. } => source.kind(),
            AppError::Configuration(_)
            | AppError::SettingsParse(_)
            | AppError::TemplateRender { .. }
            | AppError::InvalidArtifact { .. } => io::ErrorKind::InvalidInput,
            AppError::TemplateNotFound { .. } => io::ErrorKind::NotFound,
            AppError::Prompt(_) => io::ErrorKind::Other,
            AppError::PromptCancelled => io::ErrorKind::Interrupted,
        }
    }
}
