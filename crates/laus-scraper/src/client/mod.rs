//! HTTP transport for the BLS map tool servlet.

mod endpoint;

use std::time::Duration;

use laus_core::{AppConfig, FormField};
use reqwest::{Client, Url};

use crate::error::ScraperError;
use crate::identity::{BrowserIdentity, BROWSER_FALLBACK_UA};
use crate::retry::retry_with_backoff;
use crate::transport::Transport;

pub use endpoint::parse_endpoint;

const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// `reqwest`-backed [`Transport`] bound to a single endpoint URL.
///
/// Every request carries the injected [`BrowserIdentity`]. Responses are
/// returned as text for any HTTP status; only connection-level failures
/// become [`ScraperError::Transport`].
pub struct LausClient {
    client: Client,
    endpoint: Url,
    /// Additional attempts after a connection-level failure.
    max_retries: u32,
    /// Base delay for exponential backoff: `backoff_base_ms * 2^(attempt-1)`.
    backoff_base_ms: u64,
}

impl LausClient {
    /// Creates a client with the given request timeout and no retries.
    ///
    /// If `identity` does not set `User-Agent`, a desktop browser string is used.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidEndpoint`] if `endpoint_url` is not an absolute http(s) URL.
    /// - [`ScraperError::InvalidIdentity`] if a header or cookie is not encodable.
    /// - [`ScraperError::Transport`] if the `reqwest::Client` cannot be built.
    pub fn new(
        endpoint_url: &str,
        timeout_secs: u64,
        identity: &BrowserIdentity,
    ) -> Result<Self, ScraperError> {
        Self::build(
            endpoint_url,
            timeout_secs,
            DEFAULT_CONNECT_TIMEOUT_SECS,
            identity,
        )
    }

    /// Creates a client from loaded [`AppConfig`], including its retry policy.
    ///
    /// # Errors
    ///
    /// Same as [`LausClient::new`].
    pub fn from_config(
        config: &AppConfig,
        identity: &BrowserIdentity,
    ) -> Result<Self, ScraperError> {
        Ok(Self::build(
            &config.endpoint_url,
            config.request_timeout_secs,
            config.connect_timeout_secs,
            identity,
        )?
        .with_retry(config.max_retries, config.retry_backoff_base_ms))
    }

    fn build(
        endpoint_url: &str,
        timeout_secs: u64,
        connect_timeout_secs: u64,
        identity: &BrowserIdentity,
    ) -> Result<Self, ScraperError> {
        let endpoint = parse_endpoint(endpoint_url)?;

        let mut builder = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .default_headers(identity.header_map()?);
        if !identity.has_header("user-agent") {
            builder = builder.user_agent(BROWSER_FALLBACK_UA);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint,
            max_retries: 0,
            backoff_base_ms: 0,
        })
    }

    /// Enables retries on connection-level failures.
    #[must_use]
    pub fn with_retry(mut self, max_retries: u32, backoff_base_ms: u64) -> Self {
        self.max_retries = max_retries;
        self.backoff_base_ms = backoff_base_ms;
        self
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl Transport for LausClient {
    async fn fetch_form(&self, fields: &[FormField]) -> Result<String, ScraperError> {
        let client = &self.client;
        let endpoint = &self.endpoint;
        retry_with_backoff(self.max_retries, self.backoff_base_ms, move || {
            send_get(client, endpoint, fields)
        })
        .await
    }

    async fn submit_query(&self, fields: &[FormField]) -> Result<String, ScraperError> {
        let client = &self.client;
        let endpoint = &self.endpoint;
        retry_with_backoff(self.max_retries, self.backoff_base_ms, move || {
            send_post(client, endpoint, fields)
        })
        .await
    }
}

async fn send_get(
    client: &Client,
    endpoint: &Url,
    fields: &[FormField],
) -> Result<String, ScraperError> {
    let response = client.get(endpoint.clone()).query(fields).send().await?;
    tracing::debug!(
        url = %response.url(),
        status = response.status().as_u16(),
        "form page response"
    );
    Ok(response.text().await?)
}

async fn send_post(
    client: &Client,
    endpoint: &Url,
    fields: &[FormField],
) -> Result<String, ScraperError> {
    let response = client.post(endpoint.clone()).form(fields).send().await?;
    tracing::debug!(status = response.status().as_u16(), "query response");
    Ok(response.text().await?)
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
