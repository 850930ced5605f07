//! Translation table and the `t` lookup.

use crate::i18n::strings::catalog_for;
use crate::i18n::{Language, MessageKey, TranslationMetrics};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Read-only mapping from (language, key) to a localized string.
///
/// Loaded once and shared behind an `Arc`. Entries may be missing for any
/// language; [`TranslationTable::t`] resolves requested language, then the
/// fallback language, then the key itself.
#[derive(Debug)]
pub struct TranslationTable {
    catalogs: HashMap<Language, HashMap<MessageKey, &'static str>>,
    metrics: TranslationMetrics,
}

impl TranslationTable {
    /// The table compiled into the binary.
    pub fn builtin() -> Self {
        Self::from_entries(Language::ALL.into_iter().flat_map(|language| {
            catalog_for(language)
                .iter()
                .map(move |(key, value)| (language, *key, *value))
        }))
    }

    /// Build a table from explicit entries. Later duplicates win.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Language, MessageKey, &'static str)>,
    {
        let mut catalogs: HashMap<Language, HashMap<MessageKey, &'static str>> = HashMap::new();
        for (language, key, value) in entries {
            catalogs.entry(language).or_default().insert(key, value);
        }
        Self {
            catalogs,
            metrics: TranslationMetrics::new(),
        }
    }

    /// Raw entry for exactly this language, without fallback.
    ///
    /// Empty strings count as absent.
    pub fn get(&self, language: Language, key: MessageKey) -> Option<&'static str> {
        self.catalogs
            .get(&language)
            .and_then(|catalog| catalog.get(&key))
            .copied()
            .filter(|value| !value.is_empty())
    }

    /// Look up `key` for `language`.
    ///
    /// Order: the requested language, then the fallback language, then the
    /// key's dotted identifier so gaps stay visible on the page.
    pub fn t(&self, language: Language, key: MessageKey) -> &'static str {
        if let Some(value) = self.get(language, key) {
            self.metrics.record_direct_hit();
            return value;
        }

        if let Some(value) = self.get(Language::fallback(), key) {
            debug!("Missing '{}' for {}, using fallback language", key, language);
            self.metrics.record_fallback_hit();
            return value;
        }

        debug!("Missing '{}' in every language", key);
        self.metrics.record_missing();
        key.as_str()
    }

    /// Every key resolved for `language`, keyed by dotted identifier.
    pub fn dictionary(&self, language: Language) -> BTreeMap<&'static str, &'static str> {
        MessageKey::ALL
            .iter()
            .map(|key| (key.as_str(), self.t(language, *key)))
            .collect()
    }

    pub fn metrics(&self) -> &TranslationMetrics {
        &self.metrics
    }
}

/// Replace `{name}` placeholders in a localized template.
pub fn interpolate(template: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(template.to_string(), |acc, (name, value)| {
            acc.replace(&format!("{{{}}}", name), value)
        })
}
