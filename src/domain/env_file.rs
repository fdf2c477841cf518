use super::ConfigurationMap;

/// Serialize the configuration as `KEY=VALUE` lines in declaration order.
///
/// Values are written verbatim: no quoting, no escaping.
pub fn render_env_file(config: &ConfigurationMap) -> String {
    config.entries().iter().map(|(key, value)| format!("{key}={value}\n")).collect()
}
