mod artifact_store;
mod prompter;
mod secret_generator;
mod template_source;

pub use artifact_store::ArtifactStore;
pub use prompter::Prompter;
pub use secret_generator::SecretGenerator;
pub use template_source::TemplateSource;
