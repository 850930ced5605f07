//! Per-request visitor preferences: cookies, language hints and the
//! session built from them.

use crate::analytics::HeadDocument;
use crate::i18n::{preferred_locale, Language, LanguageResolver, TranslationTable};
use crate::session::{Session, SessionContext};
use crate::storage::{CookieStore, PreferenceStore};
use axum::{
    http::{header, HeaderMap, HeaderValue},
    response::Response,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::warn;

/// Explicit language header, checked after the `lang` query parameter.
pub const LANGUAGE_HEADER: &str = "X-Language";

#[derive(Debug, Default, Deserialize)]
pub struct LanguageQuery {
    pub lang: Option<String>,
}

/// Raw preference inputs of one request.
pub struct RequestPreferences {
    store: Arc<CookieStore>,
    language_override: Option<String>,
    accept_language: Option<String>,
}

impl RequestPreferences {
    pub fn from_request(headers: &HeaderMap, query: &LanguageQuery) -> Self {
        let header_text = |name: &str| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        };

        let cookie = header_text(header::COOKIE.as_str());
        let language_override = query
            .lang
            .clone()
            .filter(|lang| Language::parse(lang.trim()).is_some())
            .or_else(|| header_text(LANGUAGE_HEADER));

        Self {
            store: Arc::new(CookieStore::from_header(cookie.as_deref())),
            language_override,
            accept_language: header_text(header::ACCEPT_LANGUAGE.as_str()),
        }
    }

    fn context(&self) -> SessionContext<'_> {
        SessionContext {
            language_override: self.language_override.as_deref(),
            browser_locale: self.accept_language.as_deref().and_then(preferred_locale),
        }
    }

    /// Language for this request without starting a full session.
    pub fn language(&self) -> Language {
        let context = self.context();
        LanguageResolver::new(self.store.as_ref())
            .with_override(context.language_override)
            .with_browser_locale(context.browser_locale)
            .resolve()
    }

    pub fn start_session(
        &self,
        table: Arc<TranslationTable>,
        head: Arc<HeadDocument>,
        measurement_id: &str,
    ) -> Session {
        let store: Arc<dyn PreferenceStore> = self.store.clone();
        Session::start(self.context(), store, table, head, measurement_id)
    }

    /// Attach `Set-Cookie` headers for everything written during the request.
    pub fn apply_cookies(&self, mut response: Response) -> Response {
        for cookie in self.store.set_cookie_headers() {
            match HeaderValue::from_str(&cookie) {
                Ok(value) => {
                    response.headers_mut().append(header::SET_COOKIE, value);
                }
                Err(e) => warn!("Dropping unrepresentable cookie: {}", e),
            }
        }
        response
    }
}
