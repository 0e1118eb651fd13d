//! Static request identity (headers and cookies) attached to every request.
//!
//! The concrete values are supplied by the embedding application; this
//! module only carries them and renders them onto a `HeaderMap`.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, COOKIE};
use reqwest::Url;

use crate::error::ScraperError;

pub(crate) const BROWSER_FALLBACK_UA: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Opaque browser identity owned by the transport.
#[derive(Debug, Clone, Default)]
pub struct BrowserIdentity {
    headers: Vec<(String, String)>,
    cookies: Vec<(String, String)>,
}

impl BrowserIdentity {
    /// An identity with no headers or cookies.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Generic browser-like headers for `endpoint`: `Origin` and `Referer`
    /// pointing at the form page, plus HTML `Accept` headers. No cookies.
    #[must_use]
    pub fn for_endpoint(endpoint: &Url) -> Self {
        Self::default()
            .with_header("Origin", endpoint.origin().ascii_serialization())
            .with_header("Referer", endpoint.as_str())
            .with_header(
                "Accept",
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .with_header("Accept-Language", "en-US,en;q=0.8")
            .with_header("Cache-Control", "max-age=0")
            .with_header("Upgrade-Insecure-Requests", "1")
    }

    /// Adds or replaces a header (names compare case-insensitively).
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.headers.retain(|(n, _)| !n.eq_ignore_ascii_case(&name));
        self.headers.push((name, value.into()));
        self
    }

    /// Adds or replaces a cookie.
    #[must_use]
    pub fn with_cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.cookies.retain(|(n, _)| *n != name);
        self.cookies.push((name, value.into()));
        self
    }

    #[must_use]
    pub fn has_header(&self, name: &str) -> bool {
        self.headers.iter().any(|(n, _)| n.eq_ignore_ascii_case(name))
    }

    /// `Cookie` header value, or `None` when no cookies are set.
    #[must_use]
    pub fn cookie_header(&self) -> Option<String> {
        if self.cookies.is_empty() {
            return None;
        }
        Some(
            self.cookies
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join("; "),
        )
    }

    /// Renders headers and cookies into a `HeaderMap`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidIdentity`] when a name or value is not
    /// a legal HTTP header.
    pub fn header_map(&self) -> Result<HeaderMap, ScraperError> {
        let mut map = HeaderMap::new();
        for (name, value) in &self.headers {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| ScraperError::InvalidIdentity {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|e| ScraperError::InvalidIdentity {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            map.insert(header_name, header_value);
        }
        if let Some(cookie) = self.cookie_header() {
            let value = HeaderValue::from_str(&cookie).map_err(|e| ScraperError::InvalidIdentity {
                name: "Cookie".to_owned(),
                reason: e.to_string(),
            })?;
            map.insert(COOKIE, value);
        }
        Ok(map)
    }
}
