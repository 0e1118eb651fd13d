//! Parsed output of one scrape request.

use serde::Serialize;
use thiserror::Error;

use crate::request::ScrapeRequest;

/// Derives a URL-safe slug: lowercase, spaces replaced by underscores.
///
/// Idempotent on its own output.
#[must_use]
pub fn permalink(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

/// Unemployment figure for one county (or one state at state granularity).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountyRecord {
    pub county: String,
    pub permalink: String,
    pub unemployment: f64,
    pub state: String,
}

/// All county figures returned for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateResult {
    pub state: String,
    pub permalink: String,
    pub counties: Vec<CountyRecord>,
    pub request: ScrapeRequest,
}

impl StateResult {
    /// Pairs `counties` with `rates` positionally.
    ///
    /// # Errors
    ///
    /// Returns [`ParseFailure::CountMismatch`] when the lengths differ; no
    /// partially-filled result is ever produced.
    pub fn from_columns(
        state: &str,
        counties: Vec<String>,
        rates: Vec<f64>,
        request: ScrapeRequest,
    ) -> Result<Self, ParseFailure> {
        if counties.len() != rates.len() {
            return Err(ParseFailure::CountMismatch {
                counties: counties.len(),
                rates: rates.len(),
            });
        }

        let counties = counties
            .into_iter()
            .zip(rates)
            .map(|(county, unemployment)| CountyRecord {
                permalink: permalink(&county),
                county,
                unemployment,
                state: state.to_owned(),
            })
            .collect();

        Ok(Self {
            state: state.to_owned(),
            permalink: permalink(state),
            counties,
            request,
        })
    }
}

/// Why a single response did not yield a [`StateResult`]. Non-fatal: the
/// batch records it and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    /// The state control has no selected option, so the response does not
    /// reflect a successful query.
    #[error("no state option is marked selected")]
    NoSelectedState,

    #[error("county header count ({counties}) does not match rate count ({rates})")]
    CountMismatch { counties: usize, rates: usize },

    #[error("rate cell \"{text}\" is not a number")]
    InvalidRate { text: String },
}

/// Outcome of one attempted parameter combination.
pub type ScrapeOutcome = Result<StateResult, ParseFailure>;
