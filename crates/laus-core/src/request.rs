//! Form payloads sent to the map tool endpoint.
//!
//! [`DiscoveryRequest`] is the bootstrap payload with no selection fields;
//! [`ScrapeRequest`] is one fully-specified combination. Both render to the
//! same ordered list of form fields.

use serde::Serialize;

use crate::scrape_config::{Granularity, ScrapeConfig, SeasonalAdjustment};

/// Survey code for Local Area Unemployment Statistics.
pub const SURVEY: &str = "la";

/// A `(name, value)` pair ready for form or query-string encoding.
pub type FormField = (&'static str, String);

/// Payload for the initial unparameterized page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscoveryRequest {
    granularity: Granularity,
    seasonal: SeasonalAdjustment,
}

impl DiscoveryRequest {
    #[must_use]
    pub fn new(config: &ScrapeConfig) -> Self {
        Self {
            granularity: config.granularity(),
            seasonal: config.seasonal(),
        }
    }

    /// Fields in wire order. `state`, `datatype`, `year` and `period` are omitted.
    #[must_use]
    pub fn form_fields(&self) -> Vec<FormField> {
        vec![
            ("survey", SURVEY.to_owned()),
            ("map", self.granularity.as_form_value().to_owned()),
            ("seasonal", self.seasonal.as_form_value().to_owned()),
        ]
    }
}

/// One concrete (state, datatype, year, period) query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrapeRequest {
    pub state: String,
    pub datatype: String,
    pub year: String,
    pub period: String,
    pub survey: &'static str,
    #[serde(rename = "map")]
    pub granularity: Granularity,
    pub seasonal: SeasonalAdjustment,
}

impl ScrapeRequest {
    /// Pure mapping from configuration plus one code from each option set.
    #[must_use]
    pub fn new(
        config: &ScrapeConfig,
        state: &str,
        datatype: &str,
        year: &str,
        period: &str,
    ) -> Self {
        Self {
            state: state.to_owned(),
            datatype: datatype.to_owned(),
            year: year.to_owned(),
            period: period.to_owned(),
            survey: SURVEY,
            granularity: config.granularity(),
            seasonal: config.seasonal(),
        }
    }

    #[must_use]
    pub fn form_fields(&self) -> Vec<FormField> {
        vec![
            ("state", self.state.clone()),
            ("datatype", self.datatype.clone()),
            ("year", self.year.clone()),
            ("period", self.period.clone()),
            ("survey", self.survey.to_owned()),
            ("map", self.granularity.as_form_value().to_owned()),
            ("seasonal", self.seasonal.as_form_value().to_owned()),
        ]
    }
}
