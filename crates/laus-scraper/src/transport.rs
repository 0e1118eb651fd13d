//! The seam between orchestration and the network.

use std::future::Future;

use laus_core::FormField;

use crate::error::ScraperError;

/// Sends form payloads to the map tool endpoint and returns raw bodies.
///
/// Implementations return the body for every HTTP response, whatever its
/// status; only connection-level failures are errors.
pub trait Transport {
    /// GET with `fields` as the query string. Used once, for discovery.
    fn fetch_form(
        &self,
        fields: &[FormField],
    ) -> impl Future<Output = Result<String, ScraperError>> + Send;

    /// POST with `fields` as an `application/x-www-form-urlencoded` body.
    fn submit_query(
        &self,
        fields: &[FormField],
    ) -> impl Future<Output = Result<String, ScraperError>> + Send;
}
