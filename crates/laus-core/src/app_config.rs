use crate::scrape_config::ScrapeConfig;

pub const DEFAULT_ENDPOINT_URL: &str = "https://data.bls.gov/map/MapToolServlet";

/// Process-level settings for an extraction run, loaded from `LAUS_*`
/// environment variables by [`crate::load_app_config`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub endpoint_url: String,
    pub scrape: ScrapeConfig,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    /// Pause between consecutive scrape requests. `0` issues them back to back.
    pub inter_request_delay_ms: u64,
    /// Additional attempts after a connection-level failure. `0` disables retries.
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
}
