use crate::ports::{ArtifactStore, Prompter, SecretGenerator, TemplateSource};

/// Application context holding dependencies for command execution.
pub struct AppContext<P, S, T, G>
where
    P: Prompter,
    S: ArtifactStore,
    T: TemplateSource,
    G: SecretGenerator,
{
    prompter: P,
    store: S,
    templates: T,
    secrets: G,
}

impl<P, S, T, G> AppContext<P, S, T, G>
where
    P: Prompter,
    S: ArtifactStore,
    T: TemplateSource,
    G: SecretGenerator,
{
    /// Create a new application context.
    pub fn new(prompter: P, store: S, templates: T, secrets: G) -> Self {
        Self { prompter, store, templates, secrets }
    }

    /// Get a reference to the prompter.
    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Get a reference to the artifact store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the template source.
    pub fn templates(&self) -> &T {
        &self.templates
    }

    /// Get a reference to the secret generator.
    pub fn secrets(&self) -> &G {
        &self.secrets
    }
}
