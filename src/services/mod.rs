pub mod artifact_validation;
mod dialoguer_prompter;
mod filesystem_artifact_store;
mod random_secret_generator;
pub mod template_renderer;
mod template_sources;

pub use artifact_validation::{ArtifactFormat, validate_artifact};
pub use dialoguer_prompter::{AcceptDefaultsPrompter, DialoguerPrompter, PrompterKind};
pub use filesystem_artifact_store::FilesystemArtifactStore;
pub use random_secret_generator::RandomSecretGenerator;
pub use template_renderer::render_template;
pub use template_sources::{EmbeddedTemplateSource, FilesystemTemplateSource, TemplateSourceKind};
