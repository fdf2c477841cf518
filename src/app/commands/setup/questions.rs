//! Interactive questions. Re-prompting on invalid input is the prompter's job.

use tracing::debug;

use crate::domain::{AppError, ConfigurationMap};
use crate::ports::Prompter;

pub const MAIN_API_URL_PROMPT: &str = "What is the URL of your api?";
pub const FRONT_API_URL_PROMPT: &str = "What is the URL of your paste site?";
pub const API_KEY_PROMPT: &str = "What do you want your API key to be?";
pub const OWN_WEB_SERVER_PROMPT: &str = "Are you using your own web server?";
pub const WEB_SERVER_PORT_PROMPT: &str = "Which port should the api be exposed on?";

pub const DEFAULT_WEB_SERVER_PORT: u16 = 3000;

/// Ask for the API URL, paste site URL and API key, each defaulted from `config`.
///
/// All three answers are collected before any field is replaced. The API URL
/// answer is also written to the front-end alias.
pub fn collect_configuration<P: Prompter>(
    prompter: &P,
    mut config: ConfigurationMap,
) -> Result<ConfigurationMap, AppError> {
    let main_api_url = prompter.ask_text(MAIN_API_URL_PROMPT, &config.main_api_url)?;
    let front_api_url = prompter.ask_text(FRONT_API_URL_PROMPT, &config.front_api_url)?;
    let api_key = prompter.ask_text(API_KEY_PROMPT, &config.api_key)?;

    debug!(%main_api_url, %front_api_url, "collected api configuration");

    config.set_main_api_url(main_api_url);
    config.front_api_url = front_api_url;
    config.api_key = api_key;
    Ok(config)
}

/// Ask whether the user runs their own web server and, if so, on which port.
pub fn collect_web_server_choice<P: Prompter>(prompter: &P) -> Result<Option<u16>, AppError> {
    if !prompter.ask_confirm(OWN_WEB_SERVER_PROMPT, false)? {
        return Ok(None);
    }

    let port = prompter.ask_number(WEB_SERVER_PORT_PROMPT, DEFAULT_WEB_SERVER_PORT)?;
    if port == 0 {
        return Err(AppError::config_error("Web server port must be greater than zero"));
    }
    debug!(port, "custom web server selected");
    Ok(Some(port))
}
