//! Active language of a visitor session.

use crate::i18n::{Language, LanguageResolver, MessageKey, TranslationTable};
use crate::storage::{PreferenceStore, LANGUAGE_KEY};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

/// Holds the session's active language and exposes `t` over the shared table.
///
/// Created from a resolver result at session start. Only [`LanguageState::set_language`]
/// mutates it, and that call also persists the choice.
pub struct LanguageState {
    current: AtomicU8,
    store: Arc<dyn PreferenceStore>,
    table: Arc<TranslationTable>,
}

impl LanguageState {
    pub fn new(initial: Language, store: Arc<dyn PreferenceStore>, table: Arc<TranslationTable>) -> Self {
        Self {
            current: AtomicU8::new(initial.index()),
            store,
            table,
        }
    }

    /// Resolve the initial language from `resolver` and wrap it.
    pub fn resolve(
        resolver: &LanguageResolver<'_>,
        store: Arc<dyn PreferenceStore>,
        table: Arc<TranslationTable>,
    ) -> Self {
        let (language, source) = resolver.resolve_with_source();
        info!("Session language {} (from {:?})", language, source);
        Self::new(language, store, table)
    }

    pub fn language(&self) -> Language {
        Language::from_index(self.current.load(Ordering::Acquire)).unwrap_or_default()
    }

    /// Switch language on explicit user action and persist the choice.
    ///
    /// A failed write is logged and otherwise ignored; the in-session switch
    /// still takes effect.
    pub fn set_language(&self, language: Language) {
        self.current.store(language.index(), Ordering::Release);
        if let Err(e) = self.store.write(LANGUAGE_KEY, language.code()) {
            warn!("Error saving language to store: {}", e);
        }
    }

    /// Localized string for `key` in the active language.
    pub fn t(&self, key: MessageKey) -> &'static str {
        self.table.t(self.language(), key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_support::UnavailableStore;
    use crate::storage::MemoryStore;

    fn table() -> Arc<TranslationTable> {
        Arc::new(TranslationTable::builtin())
    }

    #[test]
    fn test_initial_language() {
        let state = LanguageState::new(Language::French, Arc::new(MemoryStore::new()), table());
        assert_eq!(state.language(), Language::French);
        assert_eq!(state.t(MessageKey::NavHome), "Accueil");
    }

    #[test]
    fn test_set_language_changes_lookups() {
        let state = LanguageState::new(Language::Spanish, Arc::new(MemoryStore::new()), table());
        assert_eq!(state.t(MessageKey::ContactSubmit), "Enviar mensaje");

        state.set_language(Language::Italian);
        assert_eq!(state.language(), Language::Italian);
        assert_eq!(state.t(MessageKey::ContactSubmit), "Invia messaggio");
    }

    #[test]
    fn test_set_language_persists() {
        let store = Arc::new(MemoryStore::new());
        let state = LanguageState::new(Language::Spanish, store.clone(), table());

        state.set_language(Language::Portuguese);
        assert_eq!(store.read(LANGUAGE_KEY).unwrap(), Some("pt".to_string()));
    }

    #[test]
    fn test_set_language_survives_store_failure() {
        let state = LanguageState::new(Language::Spanish, Arc::new(UnavailableStore), table());
        state.set_language(Language::English);
        assert_eq!(state.language(), Language::English);
    }

    #[test]
    fn test_resolve_from_store() {
        let store = Arc::new(MemoryStore::with_entries([(LANGUAGE_KEY, "it")]));
        let resolver = LanguageResolver::new(store.as_ref());
        let state = LanguageState::resolve(&resolver, store.clone(), table());
        assert_eq!(state.language(), Language::Italian);
    }
}
