//! Bootstrap-then-enumerate orchestration.
//!
//! [`LausScraper::bootstrap`] loads the form page once and discovers the
//! parameter space; [`LausScraper::scrape`] consumes the scraper and walks
//! every combination in order, one request at a time.

use std::time::Duration;

use laus_core::{AppConfig, DiscoveryRequest, ScrapeConfig, ScrapeOutcome, ScrapeRequest};

use crate::discovery::{discover_parameter_space, ParameterSpace};
use crate::error::ScraperError;
use crate::parse::parse_state_result;
use crate::summary::ScrapeSummary;
use crate::transport::Transport;

/// A bootstrapped session: configuration plus the discovered parameter space.
pub struct LausScraper<T> {
    transport: T,
    config: ScrapeConfig,
    space: ParameterSpace,
    inter_request_delay_ms: u64,
}

impl<T: Transport> LausScraper<T> {
    /// Loads the form page with only `map`, `seasonal` and `survey` set and
    /// harvests the state, year, period and datatype option sets.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Transport`] if the page cannot be fetched.
    /// - [`ScraperError::Discovery`] if any of the four controls is missing.
    pub async fn bootstrap(transport: T, config: ScrapeConfig) -> Result<Self, ScraperError> {
        let fields = DiscoveryRequest::new(&config).form_fields();
        let body = transport.fetch_form(&fields).await?;
        let space = discover_parameter_space(&body)?;

        tracing::info!(
            granularity = %config.granularity(),
            seasonal = %config.seasonal(),
            states = space.states.len(),
            years = space.years.len(),
            periods = space.periods.len(),
            datatypes = space.datatypes.len(),
            requests = space.request_count(),
            "discovered parameter space"
        );

        Ok(Self {
            transport,
            config,
            space,
            inter_request_delay_ms: 0,
        })
    }

    /// [`LausScraper::bootstrap`] with the scrape settings and
    /// inter-request delay taken from `config`.
    ///
    /// # Errors
    ///
    /// Same as [`LausScraper::bootstrap`].
    pub async fn bootstrap_from_config(
        transport: T,
        config: &AppConfig,
    ) -> Result<Self, ScraperError> {
        Ok(Self::bootstrap(transport, config.scrape)
            .await?
            .with_inter_request_delay(config.inter_request_delay_ms))
    }

    /// Waits `delay_ms` between consecutive scrape requests. Ordering is unchanged.
    #[must_use]
    pub fn with_inter_request_delay(mut self, delay_ms: u64) -> Self {
        self.inter_request_delay_ms = delay_ms;
        self
    }

    #[must_use]
    pub fn config(&self) -> &ScrapeConfig {
        &self.config
    }

    #[must_use]
    pub fn parameter_space(&self) -> &ParameterSpace {
        &self.space
    }

    /// Issues one query per combination (year, then period, then state, then
    /// datatype) and returns every outcome in that order.
    ///
    /// Parse failures are recorded and the loop continues.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Transport`] on the first connection-level
    /// failure; outcomes gathered so far are discarded.
    pub async fn scrape(self) -> Result<Vec<ScrapeOutcome>, ScraperError> {
        let total = self.space.request_count();
        let mut outcomes: Vec<ScrapeOutcome> = Vec::with_capacity(total);

        for (index, combo) in self.space.combinations().enumerate() {
            if index > 0 && self.inter_request_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(self.inter_request_delay_ms)).await;
            }

            let request = ScrapeRequest::new(
                &self.config,
                &combo.state.code,
                &combo.datatype.code,
                &combo.year.code,
                &combo.period.code,
            );
            tracing::debug!(
                n = index + 1,
                total,
                state = %request.state,
                datatype = %request.datatype,
                year = %request.year,
                period = %request.period,
                "querying"
            );

            let body = self.transport.submit_query(&request.form_fields()).await?;
            let outcome = parse_state_result(&body, &request);
            if let Err(failure) = &outcome {
                tracing::warn!(
                    state = %request.state,
                    datatype = %request.datatype,
                    year = %request.year,
                    period = %request.period,
                    %failure,
                    "response did not yield a result"
                );
            }
            outcomes.push(outcome);
        }

        let summary = ScrapeSummary::from_outcomes(&outcomes);
        tracing::info!(
            attempted = summary.attempted,
            succeeded = summary.succeeded,
            failed = summary.failed(),
            "scrape complete"
        );

        Ok(outcomes)
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
