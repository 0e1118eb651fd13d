use laus_core::ConfigError;
use thiserror::Error;

/// Fatal errors that stop a run. Per-combination parse problems are not
/// errors; they are recorded as [`laus_core::ParseFailure`] in the output.
#[derive(Debug, Error)]
pub enum ScraperError {
    /// Connection-level failure: DNS, timeout, refused connection, TLS.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The bootstrap page lacks a form control the run depends on, which
    /// means the form layout changed or the initial request was rejected.
    #[error("discovery failed: form control \"{control}\" not found in bootstrap page")]
    Discovery { control: &'static str },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid endpoint URL \"{url}\": {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("invalid identity header \"{name}\": {reason}")]
    InvalidIdentity { name: String, reason: String },
}
