use std::env;

use crate::config::{load_config, Config};
use crate::constants::{API_URL_ENV, BACKEND_PORT, CODESPACE_ENV_VARS, FORWARDING_DOMAIN, LOCAL_BASE_URL};
use crate::logging::log_debug;

/// Name of the remote development context, if the process runs inside one.
/// Empty values count as unset.
pub fn codespace_name() -> Option<String> {
    first_codespace_name(CODESPACE_ENV_VARS.iter().map(|var| env::var(var).ok()))
}

/// First non-empty context name among the candidate variables, in order.
pub fn first_codespace_name<I>(values: I) -> Option<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    values
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
}

/// Backend base URL for an execution context: the forwarded port host when a
/// context name is given, the local backend otherwise.
pub fn base_url_for_context(codespace: Option<&str>) -> String {
    match codespace {
        Some(name) if !name.is_empty() => {
            format!("https://{}-{}.{}", name, BACKEND_PORT, FORWARDING_DOMAIN)
        }
        _ => LOCAL_BASE_URL.to_string(),
    }
}

/// Resolve the base URL from the flag, the environment override, the config
/// file and finally the execution context, in that order.
pub fn resolve_base_url(flag: Option<&str>) -> String {
    let env_override = env::var(API_URL_ENV).ok();
    let config = load_config();
    resolve_base_url_with(flag, env_override.as_deref(), &config, codespace_name().as_deref())
}

pub fn resolve_base_url_with(
    flag: Option<&str>,
    env_override: Option<&str>,
    config: &Config,
    codespace: Option<&str>,
) -> String {
    let explicit = [flag, env_override, config.base_url.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|url| !url.is_empty());

    let resolved = match explicit {
        Some(url) => url.trim_end_matches('/').to_string(),
        None => base_url_for_context(codespace),
    };

    log_debug(&format!("Resolved base URL: {}", resolved));
    resolved
}
