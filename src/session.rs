//! Per-visitor session context.
//!
//! Owns the language state, the consent manager and the analytics loader of
//! one visitor. Created at session start and torn down with the session;
//! dropping it detaches the loader from the consent signal.

use crate::analytics::{AnalyticsLoader, ScriptHost};
use crate::consent::{ConsentManager, ConsentSignal, SubscriptionId};
use crate::i18n::{LanguageResolver, LanguageState, TranslationTable};
use crate::storage::PreferenceStore;
use std::sync::Arc;

/// Inputs for resolving a new session's language.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionContext<'a> {
    /// Language decided before the session starts (e.g. `?lang=`)
    pub language_override: Option<&'a str>,

    /// Locale reported by the visitor's browser
    pub browser_locale: Option<&'a str>,
}

pub struct Session {
    language: LanguageState,
    consent: ConsentManager,
    analytics: Arc<AnalyticsLoader>,
    subscription: SubscriptionId,
}

impl Session {
    /// Start a session.
    ///
    /// Resolves the initial language, loads analytics right away when consent
    /// was already granted, and subscribes the loader for later decisions.
    pub fn start(
        context: SessionContext<'_>,
        store: Arc<dyn PreferenceStore>,
        table: Arc<TranslationTable>,
        host: Arc<dyn ScriptHost>,
        measurement_id: &str,
    ) -> Self {
        let resolver = LanguageResolver::new(store.as_ref())
            .with_override(context.language_override)
            .with_browser_locale(context.browser_locale);
        let language = LanguageState::resolve(&resolver, Arc::clone(&store), table);

        let signal = Arc::new(ConsentSignal::new());
        let consent = ConsentManager::new(store, Arc::clone(&signal));

        let analytics = Arc::new(AnalyticsLoader::new(host, measurement_id));
        analytics.init(consent.flag());
        let subscription = signal.subscribe(analytics.clone());

        Self {
            language,
            consent,
            analytics,
            subscription,
        }
    }

    pub fn language(&self) -> &LanguageState {
        &self.language
    }

    pub fn consent(&self) -> &ConsentManager {
        &self.consent
    }

    pub fn analytics(&self) -> &AnalyticsLoader {
        &self.analytics
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.consent.signal().unsubscribe(self.subscription);
    }
}
