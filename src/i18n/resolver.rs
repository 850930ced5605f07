//! Language resolution for a new visitor session.
//!
//! Precedence, first match wins:
//! 1. session override (decided before the resolver runs, e.g. `?lang=`)
//! 2. persisted language choice
//! 3. browser locale, truncated to its primary subtag
//! 4. the fallback language
//!
//! Resolution never writes to the store and never fails.

use crate::i18n::Language;
use crate::storage::{PreferenceStore, LANGUAGE_KEY};
use tracing::{debug, warn};

/// Which precedence tier produced the resolved language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageSource {
    SessionOverride,
    Persisted,
    BrowserLocale,
    Fallback,
}

pub struct LanguageResolver<'a> {
    store: &'a dyn PreferenceStore,
    session_override: Option<&'a str>,
    browser_locale: Option<&'a str>,
}

impl<'a> LanguageResolver<'a> {
    pub fn new(store: &'a dyn PreferenceStore) -> Self {
        Self {
            store,
            session_override: None,
            browser_locale: None,
        }
    }

    pub fn with_override(mut self, value: Option<&'a str>) -> Self {
        self.session_override = value;
        self
    }

    /// Locale reported by the visitor's browser, e.g. "en-US".
    pub fn with_browser_locale(mut self, locale: Option<&'a str>) -> Self {
        self.browser_locale = locale;
        self
    }

    pub fn resolve(&self) -> Language {
        self.resolve_with_source().0
    }

    pub fn resolve_with_source(&self) -> (Language, LanguageSource) {
        if let Some(value) = self
            .session_override
            .map(str::trim)
            .filter(|v| !v.is_empty())
        {
            match Language::parse(value) {
                Some(language) => return (language, LanguageSource::SessionOverride),
                None => debug!("Ignoring unsupported session language override '{}'", value),
            }
        }

        if let Some(language) = self.persisted() {
            return (language, LanguageSource::Persisted);
        }

        if let Some(language) = self
            .browser_locale
            .and_then(primary_subtag)
            .and_then(|tag| Language::parse(&tag))
        {
            return (language, LanguageSource::BrowserLocale);
        }

        (Language::fallback(), LanguageSource::Fallback)
    }

    fn persisted(&self) -> Option<Language> {
        match self.store.read(LANGUAGE_KEY) {
            Ok(Some(value)) => Language::parse(&value),
            Ok(None) => None,
            Err(e) => {
                warn!("Error reading language from store: {}", e);
                None
            }
        }
    }
}

/// Primary language subtag of a locale ("en-US" -> "en"), lowercased.
pub fn primary_subtag(locale: &str) -> Option<String> {
    let primary = locale.trim().split(['-', '_']).next()?.trim();
    if primary.is_empty() {
        return None;
    }
    Some(primary.to_ascii_lowercase())
}

/// Highest-weighted locale of an `Accept-Language` header.
///
/// Entries with equal weight keep header order; `*` and `q=0` are ignored.
pub fn preferred_locale(accept_language: &str) -> Option<&str> {
    let mut best: Option<(&str, f32)> = None;

    for part in accept_language.split(',') {
        let mut pieces = part.split(';');
        let tag = pieces.next().unwrap_or_default().trim();
        if tag.is_empty() || tag == "*" {
            continue;
        }

        let weight = pieces
            .filter_map(|p| p.trim().strip_prefix("q="))
            .filter_map(|q| q.trim().parse::<f32>().ok())
            .next()
            .unwrap_or(1.0);
        if weight <= 0.0 {
            continue;
        }

        if best.map(|(_, w)| weight > w).unwrap_or(true) {
            best = Some((tag, weight));
        }
    }

    best.map(|(tag, _)| tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_support::UnavailableStore;
    use crate::storage::MemoryStore;
    use proptest::prelude::*;

    fn store_with(language: &str) -> MemoryStore {
        MemoryStore::with_entries([(LANGUAGE_KEY, language)])
    }

    // ==================== Precedence Tests ====================

    #[test]
    fn test_override_wins_over_everything() {
        let store = store_with("fr");
        let resolver = LanguageResolver::new(&store)
            .with_override(Some("it"))
            .with_browser_locale(Some("en-US"));
        assert_eq!(
            resolver.resolve_with_source(),
            (Language::Italian, LanguageSource::SessionOverride)
        );
    }

    #[test]
    fn test_empty_override_is_ignored() {
        let store = store_with("fr");
        let resolver = LanguageResolver::new(&store).with_override(Some("  "));
        assert_eq!(
            resolver.resolve_with_source(),
            (Language::French, LanguageSource::Persisted)
        );
    }

    #[test]
    fn test_unsupported_override_falls_through() {
        let store = MemoryStore::new();
        let resolver = LanguageResolver::new(&store)
            .with_override(Some("de"))
            .with_browser_locale(Some("pt-BR"));
        assert_eq!(
            resolver.resolve_with_source(),
            (Language::Portuguese, LanguageSource::BrowserLocale)
        );
    }

    #[test]
    fn test_persisted_wins_over_browser() {
        let store = store_with("en");
        let resolver = LanguageResolver::new(&store).with_browser_locale(Some("fr-FR"));
        assert_eq!(resolver.resolve(), Language::English);
    }

    #[test]
    fn test_invalid_persisted_value_is_not_set() {
        let store = store_with("klingon");
        let resolver = LanguageResolver::new(&store).with_browser_locale(Some("it-IT"));
        assert_eq!(
            resolver.resolve_with_source(),
            (Language::Italian, LanguageSource::BrowserLocale)
        );
    }

    #[test]
    fn test_store_failure_degrades_to_next_tier() {
        let store = UnavailableStore;
        let resolver = LanguageResolver::new(&store).with_browser_locale(Some("en-GB"));
        assert_eq!(resolver.resolve(), Language::English);
    }

    #[test]
    fn test_nothing_available_falls_back_to_spanish() {
        let store = UnavailableStore;
        let resolver = LanguageResolver::new(&store);
        assert_eq!(
            resolver.resolve_with_source(),
            (Language::Spanish, LanguageSource::Fallback)
        );
    }

    #[test]
    fn test_resolution_does_not_persist() {
        let store = MemoryStore::new();
        LanguageResolver::new(&store)
            .with_browser_locale(Some("fr-CA"))
            .resolve();
        assert_eq!(store.read(LANGUAGE_KEY).unwrap(), None);
    }

    // ==================== Locale Parsing Tests ====================

    #[test]
    fn test_primary_subtag() {
        assert_eq!(primary_subtag("en-US"), Some("en".to_string()));
        assert_eq!(primary_subtag("pt_BR"), Some("pt".to_string()));
        assert_eq!(primary_subtag("FR"), Some("fr".to_string()));
        assert_eq!(primary_subtag(""), None);
        assert_eq!(primary_subtag("-US"), None);
    }

    #[test]
    fn test_preferred_locale_uses_weights() {
        assert_eq!(
            preferred_locale("de-DE;q=0.5, it-IT;q=0.9, en;q=0.8"),
            Some("it-IT")
        );
    }

    #[test]
    fn test_preferred_locale_defaults_to_first() {
        assert_eq!(preferred_locale("fr-CH, fr;q=0.9, en;q=0.8"), Some("fr-CH"));
    }

    #[test]
    fn test_preferred_locale_skips_wildcard_and_zero() {
        assert_eq!(preferred_locale("*, es;q=0, pt;q=0.3"), Some("pt"));
        assert_eq!(preferred_locale(""), None);
    }

    // ==================== Properties ====================

    proptest! {
        #[test]
        fn prop_persisted_language_is_resolved(index in 0usize..5) {
            let language = Language::ALL[index];
            let store = store_with(language.code());
            prop_assert_eq!(LanguageResolver::new(&store).resolve(), language);
        }

        #[test]
        fn prop_unsupported_locale_resolves_to_spanish(
            locale in "[a-z]{3,8}(-[A-Z]{2})?|[a-z]{2}-[A-Z]{2}"
        ) {
            let primary = primary_subtag(&locale).unwrap_or_default();
            prop_assume!(Language::parse(&primary).is_none());

            let store = MemoryStore::new();
            let resolver = LanguageResolver::new(&store).with_browser_locale(Some(&locale));
            prop_assert_eq!(resolver.resolve(), Language::Spanish);
        }
    }
}
