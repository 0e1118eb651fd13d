//! The immutable (granularity, seasonal adjustment) pair that scopes a run.

use std::str::FromStr;

use serde::Serialize;

use crate::ConfigError;

/// Whether rates are reported per state or per county within a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    State,
    County,
}

impl Granularity {
    /// Value sent in the `map` form field.
    #[must_use]
    pub fn as_form_value(self) -> &'static str {
        match self {
            Granularity::State => "state",
            Granularity::County => "county",
        }
    }
}

impl FromStr for Granularity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "state" => Ok(Granularity::State),
            "county" => Ok(Granularity::County),
            other => Err(ConfigError::InvalidGranularity(other.to_owned())),
        }
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_form_value())
    }
}

/// Whether seasonal variation has been removed from the published rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonalAdjustment {
    Seasonal,
    Unadjusted,
}

impl SeasonalAdjustment {
    /// Value sent in the `seasonal` form field (`s` or `u`).
    #[must_use]
    pub fn as_form_value(self) -> &'static str {
        match self {
            SeasonalAdjustment::Seasonal => "s",
            SeasonalAdjustment::Unadjusted => "u",
        }
    }
}

impl FromStr for SeasonalAdjustment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "seasonal" => Ok(SeasonalAdjustment::Seasonal),
            "unadjusted" => Ok(SeasonalAdjustment::Unadjusted),
            other => Err(ConfigError::InvalidSeasonalAdjustment(other.to_owned())),
        }
    }
}

impl std::fmt::Display for SeasonalAdjustment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeasonalAdjustment::Seasonal => f.write_str("seasonal"),
            SeasonalAdjustment::Unadjusted => f.write_str("unadjusted"),
        }
    }
}

/// Validated run configuration. Fields are private so a constructed value
/// can never be mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrapeConfig {
    granularity: Granularity,
    seasonal: SeasonalAdjustment,
}

impl ScrapeConfig {
    #[must_use]
    pub fn new(granularity: Granularity, seasonal: SeasonalAdjustment) -> Self {
        Self {
            granularity,
            seasonal,
        }
    }

    /// Validates raw user input.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidGranularity`] unless `granularity` is `"state"` or `"county"`.
    /// - [`ConfigError::InvalidSeasonalAdjustment`] unless `seasonal` is
    ///   `"seasonal"` or `"unadjusted"`.
    pub fn parse(granularity: &str, seasonal: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(granularity.parse()?, seasonal.parse()?))
    }

    #[must_use]
    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    #[must_use]
    pub fn seasonal(&self) -> SeasonalAdjustment {
        self.seasonal
    }
}
