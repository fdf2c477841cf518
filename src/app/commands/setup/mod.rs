//! Setup wizard pipeline.
//!
//! EnsureDirs -> AskApiConfig -> WriteEnvFile -> WriteUploadProfiles ->
//! AskWebServerPort -> WriteComposeFile -> [no custom port] WriteProxyConfig.
//!
//! The first error aborts the run; files written before it stay on disk.

pub mod artifacts;
pub mod questions;
pub mod values;

use std::path::PathBuf;

use tracing::info;

use crate::app::AppContext;
use crate::domain::{AppError, DefaultsOverride, SetupPaths};
use crate::ports::{ArtifactStore, Prompter, SecretGenerator, TemplateSource};

/// Result of a completed setup run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupOutcome {
    pub output_root: PathBuf,
    /// Artifacts written, in pipeline order.
    pub written: Vec<PathBuf>,
    /// Stale artifacts from an earlier run that no longer apply.
    pub removed: Vec<PathBuf>,
    /// Port of the user's own web server, if one was chosen.
    pub web_server_port: Option<u16>,
}

/// Run the full setup pipeline.
pub fn execute<P, S, T, G>(
    ctx: &AppContext<P, S, T, G>,
    paths: &SetupPaths,
    overrides: &DefaultsOverride,
) -> Result<SetupOutcome, AppError>
where
    P: Prompter,
    S: ArtifactStore + Sync,
    T: TemplateSource + Sync,
    G: SecretGenerator,
{
    overrides.validate()?;

    for dir in paths.required_dirs() {
        ctx.store().ensure_dir(&dir)?;
    }

    let defaults = values::initial_configuration(ctx.secrets(), overrides);
    let config = questions::collect_configuration(ctx.prompter(), defaults)?;

    let mut written = vec![artifacts::generate_env_file(ctx.store(), paths, &config)?];
    written.extend(artifacts::generate_upload_profiles(
        ctx.store(),
        ctx.templates(),
        paths,
        &config,
    )?);

    let port = questions::collect_web_server_choice(ctx.prompter())?;
    written.push(artifacts::generate_compose_file(ctx.store(), ctx.templates(), paths, port)?);

    let mut removed = Vec::new();
    match port {
        None => {
            written.push(artifacts::generate_proxy_config(
                ctx.store(),
                ctx.templates(),
                paths,
                &config,
            )?);
        }
        Some(port) => {
            let caddyfile = paths.caddyfile();
            if ctx.store().remove_artifact(&caddyfile)? {
                info!(path = %caddyfile.display(), port, "removed proxy config from earlier run");
                removed.push(caddyfile);
            }
        }
    }

    info!(root = %paths.output_root().display(), artifacts = written.len(), "setup complete");
    Ok(SetupOutcome {
        output_root: paths.output_root().to_path_buf(),
        written,
        removed,
        web_server_port: port,
    })
}
