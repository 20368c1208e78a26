use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

const DEFAULT_SEARCH_BASE_URL: &str = "https://r.gnavi.co.jp/area/jp/rs/?p=";
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if an env var holds an unparseable value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if an env var holds an unparseable value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let search_base_url = or_default("GNAVCRAWL_SEARCH_BASE_URL", DEFAULT_SEARCH_BASE_URL);
    let listing_demand = parse_usize("GNAVCRAWL_LISTING_DEMAND", "50")?;
    let page_size = parse_usize("GNAVCRAWL_PAGE_SIZE", "30")?;
    if page_size == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "GNAVCRAWL_PAGE_SIZE".to_string(),
            reason: "page size must be at least 1".to_string(),
        });
    }
    let output_path = PathBuf::from(or_default("GNAVCRAWL_OUTPUT_PATH", "./listings.csv"));
    let log_level = or_default("GNAVCRAWL_LOG_LEVEL", "info");
    let user_agent = or_default("GNAVCRAWL_USER_AGENT", DEFAULT_USER_AGENT);
    let request_timeout_secs = parse_u64("GNAVCRAWL_REQUEST_TIMEOUT_SECS", "30")?;
    let tls_connect_timeout_secs = parse_u64("GNAVCRAWL_TLS_CONNECT_TIMEOUT_SECS", "5")?;
    let inter_request_delay_ms = parse_u64("GNAVCRAWL_INTER_REQUEST_DELAY_MS", "250")?;

    Ok(AppConfig {
        search_base_url,
        listing_demand,
        page_size,
        output_path,
        log_level,
        user_agent,
        request_timeout_secs,
        tls_connect_timeout_secs,
        inter_request_delay_ms,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
