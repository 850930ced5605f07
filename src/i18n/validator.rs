//! Translation coverage validation.
//!
//! Reports gaps in a `TranslationTable` so they can be fixed during content
//! review. Gaps never break lookups; see `TranslationTable::t`.

use crate::i18n::{Language, MessageKey, TranslationTable};

/// Validation report containing errors and warnings about a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Gaps that surface as raw keys on the page
    pub errors: Vec<String>,

    /// Gaps hidden by the fallback language
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

pub struct TranslationValidator;

impl TranslationValidator {
    /// Check every (language, key) pair of `table`.
    ///
    /// A key missing from the fallback language is an error, since a visitor
    /// in any language may end up seeing the bare key. A key missing from
    /// another language is a warning.
    pub fn coverage(table: &TranslationTable) -> ValidationReport {
        let mut report = ValidationReport::new();
        let fallback = Language::fallback();

        for key in MessageKey::ALL {
            if table.get(fallback, key).is_none() {
                report.errors.push(format!(
                    "'{}' is missing from the fallback language ({})",
                    key, fallback
                ));
            }
        }

        for language in Language::ALL.into_iter().filter(|l| *l != fallback) {
            let missing: Vec<&str> = MessageKey::ALL
                .iter()
                .filter(|key| table.get(language, **key).is_none())
                .map(|key| key.as_str())
                .collect();

            if !missing.is_empty() {
                report.warnings.push(format!(
                    "{} ({}) is missing {} key(s): {}",
                    language.name(),
                    language,
                    missing.len(),
                    missing.join(", ")
                ));
            }
        }

        report
    }
}
