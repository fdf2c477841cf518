//! Artifact generation: load template, render, validate, write.

use std::path::{Path, PathBuf};
use std::thread;

use tracing::info;

use crate::domain::paths::{CADDYFILE_TEMPLATE, COMPOSE_TEMPLATE, profile_template};
use crate::domain::{
    AppError, ConfigurationMap, SetupPaths, TemplateValues, UploadProfile, render_env_file,
};
use crate::ports::{ArtifactStore, TemplateSource};
use crate::services::{ArtifactFormat, render_template, validate_artifact};

fn write_into_dir<S: ArtifactStore>(store: &S, path: &Path, content: &str) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        store.ensure_dir(parent)?;
    }
    store.write_artifact(path, content)?;
    info!(path = %path.display(), "generated artifact");
    Ok(())
}

fn render_artifact<S, T>(
    store: &S,
    templates: &T,
    template_name: &str,
    values: &TemplateValues,
    output: &Path,
    format: ArtifactFormat,
) -> Result<(), AppError>
where
    S: ArtifactStore,
    T: TemplateSource,
{
    let template = templates.load_template(template_name)?;
    let rendered = render_template(template_name, &template, values)?;
    validate_artifact(output, format, &rendered)?;
    write_into_dir(store, output, &rendered)
}

/// Write `.env` with one `KEY=VALUE` line per configuration field.
pub fn generate_env_file<S: ArtifactStore>(
    store: &S,
    paths: &SetupPaths,
    config: &ConfigurationMap,
) -> Result<PathBuf, AppError> {
    let path = paths.env_file();
    write_into_dir(store, &path, &render_env_file(config))?;
    Ok(path)
}

/// Render the Caddy reverse-proxy config.
pub fn generate_proxy_config<S, T>(
    store: &S,
    templates: &T,
    paths: &SetupPaths,
    config: &ConfigurationMap,
) -> Result<PathBuf, AppError>
where
    S: ArtifactStore,
    T: TemplateSource,
{
    let path = paths.caddyfile();
    render_artifact(
        store,
        templates,
        CADDYFILE_TEMPLATE,
        &TemplateValues::proxy(config),
        &path,
        ArtifactFormat::Text,
    )?;
    Ok(path)
}

/// Render the compose file. An absent port drops the port mapping block.
pub fn generate_compose_file<S, T>(
    store: &S,
    templates: &T,
    paths: &SetupPaths,
    port: Option<u16>,
) -> Result<PathBuf, AppError>
where
    S: ArtifactStore,
    T: TemplateSource,
{
    let path = paths.compose_file();
    render_artifact(
        store,
        templates,
        COMPOSE_TEMPLATE,
        &TemplateValues::compose(port),
        &path,
        ArtifactFormat::Yaml,
    )?;
    Ok(path)
}

fn generate_profile<S, T>(
    store: &S,
    templates: &T,
    paths: &SetupPaths,
    profile: UploadProfile,
    values: &TemplateValues,
) -> Result<PathBuf, AppError>
where
    S: ArtifactStore,
    T: TemplateSource,
{
    let path = paths.profile(profile);
    render_artifact(
        store,
        templates,
        &profile_template(profile),
        values,
        &path,
        ArtifactFormat::Json,
    )?;
    Ok(path)
}

/// Render all upload profiles, one thread per profile.
///
/// Every profile is attempted even if another fails; the first failure in
/// profile order is returned.
pub fn generate_upload_profiles<S, T>(
    store: &S,
    templates: &T,
    paths: &SetupPaths,
    config: &ConfigurationMap,
) -> Result<Vec<PathBuf>, AppError>
where
    S: ArtifactStore + Sync,
    T: TemplateSource + Sync,
{
    let values = TemplateValues::profile(config);

    let results: Vec<Result<PathBuf, AppError>> = thread::scope(|scope| {
        let handles: Vec<_> = UploadProfile::ALL
            .into_iter()
            .map(|profile| {
                let values = &values;
                let handle =
                    scope.spawn(move || generate_profile(store, templates, paths, profile, values));
                (profile, handle)
            })
            .collect();

        handles
            .into_iter()
            .map(|(profile, handle)| {
                handle.join().unwrap_or_else(|_| {
                    Err(AppError::config_error(format!(
                        "Writer for profile '{}' panicked",
                        profile.name()
                    )))
                })
            })
            .collect()
    });

    results.into_iter().collect()
}
