//! Harvesting the live parameter space from the bootstrap form page.
//!
//! `state`, `year` and `period` are `<select>` controls whose `<option>`
//! children carry code and label. `datatype` is a group of radio `<input>`
//! elements whose label is the text node that follows each input, so it
//! needs its own extraction rule.

use std::sync::LazyLock;

use laus_core::{FormOption, OptionSet};
use scraper::{ElementRef, Html, Selector};

use crate::error::ScraperError;

static SELECT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("select").expect("valid select selector"));
static OPTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("option").expect("valid option selector"));
static INPUT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("input").expect("valid input selector"));

pub const STATE_CONTROL: &str = "state";
pub const YEAR_CONTROL: &str = "year";
pub const PERIOD_CONTROL: &str = "period";
pub const DATATYPE_CONTROL: &str = "datatype";

/// Every value the form accepts for each selection field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSpace {
    pub states: OptionSet,
    pub years: OptionSet,
    pub periods: OptionSet,
    pub datatypes: OptionSet,
}

/// One point of the cross-product, borrowed from a [`ParameterSpace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Combination<'a> {
    pub year: &'a FormOption,
    pub period: &'a FormOption,
    pub state: &'a FormOption,
    pub datatype: &'a FormOption,
}

impl ParameterSpace {
    /// `|years| × |periods| × |states| × |datatypes|`.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.years.len() * self.periods.len() * self.states.len() * self.datatypes.len()
    }

    /// The full cross-product, outer to inner: year, period, state, datatype.
    pub fn combinations(&self) -> impl Iterator<Item = Combination<'_>> {
        self.years.iter().flat_map(move |year| {
            self.periods.iter().flat_map(move |period| {
                self.states.iter().flat_map(move |state| {
                    self.datatypes.iter().map(move |datatype| Combination {
                        year,
                        period,
                        state,
                        datatype,
                    })
                })
            })
        })
    }
}

/// Extracts all four option sets from the bootstrap page.
///
/// # Errors
///
/// Returns [`ScraperError::Discovery`] naming the first control that is
/// absent, checked in the order state, year, period, datatype.
pub fn discover_parameter_space(body: &str) -> Result<ParameterSpace, ScraperError> {
    let document = Html::parse_document(body);

    let states = extract_select_options(&document, STATE_CONTROL).ok_or(ScraperError::Discovery {
        control: STATE_CONTROL,
    })?;
    let years = extract_select_options(&document, YEAR_CONTROL).ok_or(ScraperError::Discovery {
        control: YEAR_CONTROL,
    })?;
    let periods =
        extract_select_options(&document, PERIOD_CONTROL).ok_or(ScraperError::Discovery {
            control: PERIOD_CONTROL,
        })?;
    let datatypes =
        extract_radio_options(&document, DATATYPE_CONTROL).ok_or(ScraperError::Discovery {
            control: DATATYPE_CONTROL,
        })?;

    Ok(ParameterSpace {
        states,
        years,
        periods,
        datatypes,
    })
}

/// Options of the first `<select name="{name}">`, or `None` if the document
/// has no such control.
///
/// An `<option>` without a `value` attribute submits its text, so that text
/// is used as the code.
#[must_use]
pub fn extract_select_options(document: &Html, name: &str) -> Option<OptionSet> {
    let select = find_select(document, name)?;

    let pairs = select.select(&OPTION).map(|option| {
        let label = element_text(option);
        let code = option
            .value()
            .attr("value")
            .map_or_else(|| label.clone(), |v| v.trim().to_owned());
        (code, label)
    });

    Some(finish(name, pairs))
}

/// Options of the `<input name="{name}">` radio group, or `None` if the
/// document has no such input.
///
/// The label is the first non-blank text node after each input. When the
/// input is followed by a `<label>` element instead (whitespace between the
/// two is ignored), that element's text is used.
/// Inputs without a `value` attribute are skipped.
#[must_use]
pub fn extract_radio_options(document: &Html, name: &str) -> Option<OptionSet> {
    let inputs: Vec<ElementRef<'_>> = document
        .select(&INPUT)
        .filter(|input| input.value().attr("name") == Some(name))
        .collect();
    if inputs.is_empty() {
        return None;
    }

    let pairs = inputs.into_iter().filter_map(|input| {
        let code = input.value().attr("value")?.trim().to_owned();
        Some((code, trailing_label(input)))
    });

    Some(finish(name, pairs))
}

/// The `<select name="{name}">` element, if any.
pub(crate) fn find_select<'a>(document: &'a Html, name: &str) -> Option<ElementRef<'a>> {
    document
        .select(&SELECT)
        .find(|select| select.value().attr("name") == Some(name))
}

/// Element text with runs of whitespace collapsed to single spaces.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    normalize_whitespace(&element.text().collect::<String>())
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn trailing_label(input: ElementRef<'_>) -> String {
    for next in input.next_siblings() {
        if let Some(text) = next.value().as_text() {
            let text = normalize_whitespace(text);
            if text.is_empty() {
                continue;
            }
            return text;
        }
        // the first element after the input ends the search
        return ElementRef::wrap(next)
            .filter(|el| el.value().name() == "label")
            .map(element_text)
            .unwrap_or_default();
    }
    String::new()
}

fn finish<I>(control: &str, pairs: I) -> OptionSet
where
    I: Iterator<Item = (String, String)>,
{
    let (set, duplicates) = OptionSet::from_pairs(pairs);
    if !duplicates.is_empty() {
        tracing::warn!(
            control,
            ?duplicates,
            "dropped duplicate option codes, keeping first occurrence"
        );
    }
    if set.is_empty() {
        tracing::warn!(control, "form control has no options");
    }
    set
}

#[cfg(test)]
#[path = "discovery_test.rs"]
mod tests;
