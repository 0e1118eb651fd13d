//! Ordered (code, label) pairs harvested from one HTML form control.

use serde::Serialize;

/// One selectable value of a form control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormOption {
    /// Submitted value, e.g. `"06"` for California.
    pub code: String,
    /// Human-readable text shown next to the control.
    pub label: String,
}

/// The valid values of a single form control, in document order.
///
/// Codes are unique: [`OptionSet::from_pairs`] keeps the first occurrence of
/// a code and drops later repeats. Order determines enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OptionSet {
    options: Vec<FormOption>,
}

impl OptionSet {
    /// Builds a set from `(code, label)` pairs. Returns the set and the codes
    /// that were dropped as duplicates, so callers can report them.
    pub fn from_pairs<I, C, L>(pairs: I) -> (Self, Vec<String>)
    where
        I: IntoIterator<Item = (C, L)>,
        C: Into<String>,
        L: Into<String>,
    {
        let mut options: Vec<FormOption> = Vec::new();
        let mut duplicates = Vec::new();
        for (code, label) in pairs {
            let code = code.into();
            if options.iter().any(|o| o.code == code) {
                duplicates.push(code);
                continue;
            }
            options.push(FormOption {
                code,
                label: label.into(),
            });
        }
        (Self { options }, duplicates)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FormOption> {
        self.options.iter()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|o| o.code.as_str())
    }

    /// Label for `code`, if present.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.code == code)
            .map(|o| o.label.as_str())
    }
}

impl<'a> IntoIterator for &'a OptionSet {
    type Item = &'a FormOption;
    type IntoIter = std::slice::Iter<'a, FormOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.iter()
    }
}
