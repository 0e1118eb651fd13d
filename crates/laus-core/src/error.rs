use thiserror::Error;

/// Errors raised while building a scrape configuration.
///
/// All variants are detected before any network access.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("invalid granularity \"{0}\": expected \"state\" or \"county\"")]
    InvalidGranularity(String),

    #[error("invalid seasonal adjustment \"{0}\": expected \"seasonal\" or \"unadjusted\"")]
    InvalidSeasonalAdjustment(String),
}
