//! Endpoint URL validation.

use reqwest::Url;

use crate::error::ScraperError;

/// Parses and validates the form endpoint URL.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidEndpoint`] if `endpoint_url` does not parse
/// or is not an `http`/`https` URL with a host.
pub fn parse_endpoint(endpoint_url: &str) -> Result<Url, ScraperError> {
    let url = Url::parse(endpoint_url.trim()).map_err(|e| ScraperError::InvalidEndpoint {
        url: endpoint_url.to_owned(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ScraperError::InvalidEndpoint {
            url: endpoint_url.to_owned(),
            reason: format!("unsupported scheme \"{}\"", url.scheme()),
        });
    }
    if url.host_str().is_none() {
        return Err(ScraperError::InvalidEndpoint {
            url: endpoint_url.to_owned(),
            reason: "missing host".to_owned(),
        });
    }
    Ok(url)
}
