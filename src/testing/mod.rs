mod fixed_secret_generator;
mod memory_artifact_store;
mod memory_template_source;
mod scripted_prompter;

pub use fixed_secret_generator::FixedSecretGenerator;
pub use memory_artifact_store::MemoryArtifactStore;
pub use memory_template_source::MemoryTemplateSource;
pub use scripted_prompter::{Answer, ScriptedPrompter};
