//! Converts a query response into a validated [`StateResult`].
//!
//! A successful response has the queried state marked `selected` in the
//! state control and an output table with one `th.OutputHead` per county
//! (after two fixed leading header cells) and one `td.OutputCell` rate per
//! county. Anything else becomes a [`ParseFailure`].

use std::sync::LazyLock;

use laus_core::{ParseFailure, ScrapeOutcome, ScrapeRequest, StateResult};
use scraper::{Html, Selector};

use crate::discovery::{element_text, find_select, STATE_CONTROL};

static SELECTED_OPTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("option[selected]").expect("valid selected selector"));
static COUNTY_HEADER: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("th.OutputHead").expect("valid header selector"));
static RATE_CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td.OutputCell").expect("valid cell selector"));

/// Header cells that precede the county names in the output table.
const LEADING_HEADER_CELLS: usize = 2;

/// Parses one response body. Pure: no I/O, no logging.
///
/// The table is only inspected once a selected state has been found.
pub fn parse_state_result(body: &str, request: &ScrapeRequest) -> ScrapeOutcome {
    let document = Html::parse_document(body);

    let state = selected_state(&document).ok_or(ParseFailure::NoSelectedState)?;
    let counties = county_headers(&document);
    let rates = rate_cells(&document)?;

    StateResult::from_columns(&state, counties, rates, request.clone())
}

fn selected_state(document: &Html) -> Option<String> {
    find_select(document, STATE_CONTROL)?
        .select(&SELECTED_OPTION)
        .next()
        .map(element_text)
}

fn county_headers(document: &Html) -> Vec<String> {
    document
        .select(&COUNTY_HEADER)
        .skip(LEADING_HEADER_CELLS)
        .map(element_text)
        .collect()
}

fn rate_cells(document: &Html) -> Result<Vec<f64>, ParseFailure> {
    document
        .select(&RATE_CELL)
        .map(|cell| {
            let text = element_text(cell);
            text.parse::<f64>()
                .map_err(|_| ParseFailure::InvalidRate { text })
        })
        .collect()
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
