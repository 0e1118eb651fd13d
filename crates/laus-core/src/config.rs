use crate::app_config::{AppConfig, DEFAULT_ENDPOINT_URL};
use crate::scrape_config::ScrapeConfig;
use crate::ConfigError;

/// Load run configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load run configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function, so the
/// parsing rules can be tested against a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let endpoint_url = or_default("LAUS_ENDPOINT_URL", DEFAULT_ENDPOINT_URL);
    if endpoint_url.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "LAUS_ENDPOINT_URL".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let scrape = ScrapeConfig::parse(
        &or_default("LAUS_GRANULARITY", "county"),
        &or_default("LAUS_SEASONAL", "unadjusted"),
    )?;

    let log_level = or_default("LAUS_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("LAUS_REQUEST_TIMEOUT_SECS", "30")?;
    let connect_timeout_secs = parse_u64("LAUS_CONNECT_TIMEOUT_SECS", "10")?;
    let inter_request_delay_ms = parse_u64("LAUS_INTER_REQUEST_DELAY_MS", "0")?;
    let max_retries = parse_u32("LAUS_MAX_RETRIES", "0")?;
    let retry_backoff_base_ms = parse_u64("LAUS_RETRY_BACKOFF_BASE_MS", "1000")?;

    Ok(AppConfig {
        endpoint_url,
        scrape,
        log_level,
        request_timeout_secs,
        connect_timeout_secs,
        inter_request_delay_ms,
        max_retries,
        retry_backoff_base_ms,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
