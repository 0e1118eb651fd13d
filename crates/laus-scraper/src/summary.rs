use laus_core::{ParseFailure, ScrapeOutcome};

/// Tally of a finished run, by outcome kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrapeSummary {
    pub attempted: usize,
    pub succeeded: usize,
    pub no_selected_state: usize,
    pub count_mismatch: usize,
    pub invalid_rate: usize,
}

impl ScrapeSummary {
    #[must_use]
    pub fn from_outcomes(outcomes: &[ScrapeOutcome]) -> Self {
        let mut summary = Self {
            attempted: outcomes.len(),
            ..Self::default()
        };
        for outcome in outcomes {
            match outcome {
                Ok(_) => summary.succeeded += 1,
                Err(ParseFailure::NoSelectedState) => summary.no_selected_state += 1,
                Err(ParseFailure::CountMismatch { .. }) => summary.count_mismatch += 1,
                Err(ParseFailure::InvalidRate { .. }) => summary.invalid_rate += 1,
            }
        }
        summary
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.attempted - self.succeeded
    }
}
