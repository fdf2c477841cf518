use crate::domain::{ConfigurationMap, DefaultsOverride};
use crate::ports::SecretGenerator;

/// Fresh configuration with built-in defaults and two independent secrets.
pub fn default_configuration<G: SecretGenerator>(secrets: &G) -> ConfigurationMap {
    let api_key = secrets.generate_secret();
    let db_password = secrets.generate_secret();
    ConfigurationMap::with_secrets(api_key, db_password)
}

/// Defaults with settings-file overrides applied.
pub fn initial_configuration<G: SecretGenerator>(
    secrets: &G,
    overrides: &DefaultsOverride,
) -> ConfigurationMap {
    let mut config = default_configuration(secrets);
    config.apply_overrides(overrides);
    config
}
