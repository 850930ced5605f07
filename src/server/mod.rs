//! HTTP surface of the site.

mod error;
mod handlers;
mod request;

pub use error::{ApiError, ApiResult};
pub use handlers::{ConsentChoice, SessionView};
pub use request::{LanguageQuery, RequestPreferences, LANGUAGE_HEADER};

use crate::config::Config;
use crate::contact::{ContactPipeline, ResendMailer};
use crate::i18n::TranslationTable;
use anyhow::{Context, Result};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{services::ServeDir, trace::TraceLayer};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub translations: Arc<TranslationTable>,
    pub contact: Arc<ContactPipeline<ResendMailer>>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .context("Failed to build HTTP client")?;

        let mailer = ResendMailer::new(
            http.clone(),
            config.resend_api_key.clone(),
            config.resend_api_url.clone(),
        );
        let contact = ContactPipeline::new(
            mailer,
            config.contact_policy.clone(),
            config.contact_from.clone(),
            config.contact_recipients.clone(),
        );

        Ok(Self {
            config: Arc::new(config),
            translations: Arc::new(TranslationTable::builtin()),
            contact: Arc::new(contact),
            http,
        })
    }
}

pub fn create_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    let router = Router::new()
        .route("/health", get(handlers::health))
        .route("/api/site", get(handlers::site))
        .route("/api/i18n/:lang", get(handlers::dictionary))
        .route("/api/session", get(handlers::session))
        .route("/api/language", post(handlers::set_language))
        .route("/api/consent", post(handlers::set_consent))
        .route("/api/send-email", post(handlers::send_email))
        .route("/api/testimonials", get(handlers::testimonials));

    let router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router.layer(TraceLayer::new_for_http()).with_state(state)
}
