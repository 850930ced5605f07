use crate::analytics::{HeadDocument, ScriptTag};
use crate::consent::ConsentFlag;
use crate::i18n::Language;
use crate::server::error::{ApiError, ApiResult};
use crate::server::request::{LanguageQuery, RequestPreferences};
use crate::server::AppState;
use crate::session::Session;
use crate::site::SiteConfig;
use crate::testimonials::{fetch_testimonials, Testimonial};
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "translations": state.translations.metrics().report(),
    }))
}

pub async fn site(State(state): State<AppState>) -> Json<SiteConfig> {
    Json(state.config.site.clone())
}

pub async fn dictionary(
    State(state): State<AppState>,
    Path(lang): Path<String>,
) -> ApiResult<Json<BTreeMap<&'static str, &'static str>>> {
    let language = Language::parse(&lang)
        .ok_or_else(|| ApiError::NotFound(format!("language '{}'", lang)))?;
    Ok(Json(state.translations.dictionary(language)))
}

/// What the page needs to render a visitor's session.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub language: Language,
    pub consent: ConsentFlag,
    pub show_consent_prompt: bool,
    pub scripts: Vec<ScriptTag>,
    pub data_layer: Vec<Value>,
}

impl SessionView {
    fn new(session: &Session, head: &HeadDocument) -> Self {
        Self {
            language: session.language().language(),
            consent: session.consent().flag(),
            show_consent_prompt: session.consent().should_prompt(),
            scripts: head.scripts(),
            data_layer: head.data_layer(),
        }
    }
}

fn open_session(state: &AppState, prefs: &RequestPreferences) -> (Session, Arc<HeadDocument>) {
    let head = Arc::new(HeadDocument::new());
    let session = prefs.start_session(
        Arc::clone(&state.translations),
        Arc::clone(&head),
        &state.config.ga_measurement_id,
    );
    (session, head)
}

pub async fn session(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<LanguageQuery>,
) -> Response {
    let prefs = RequestPreferences::from_request(&headers, &query);
    let (session, head) = open_session(&state, &prefs);
    let view = SessionView::new(&session, &head);
    prefs.apply_cookies(Json(view).into_response())
}

#[derive(Debug, Deserialize)]
pub struct LanguageChange {
    pub language: String,
}

pub async fn set_language(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<LanguageQuery>,
    Json(body): Json<LanguageChange>,
) -> ApiResult<Response> {
    let language = Language::parse(&body.language)
        .ok_or_else(|| ApiError::BadRequest(format!("Unsupported language: {}", body.language)))?;

    let prefs = RequestPreferences::from_request(&headers, &query);
    let (session, head) = open_session(&state, &prefs);
    session.language().set_language(language);

    let view = SessionView::new(&session, &head);
    Ok(prefs.apply_cookies(Json(view).into_response()))
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentChoice {
    All,
    Essential,
}

#[derive(Debug, Deserialize)]
pub struct ConsentChange {
    pub choice: ConsentChoice,
}

pub async fn set_consent(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<LanguageQuery>,
    Json(body): Json<ConsentChange>,
) -> Response {
    let prefs = RequestPreferences::from_request(&headers, &query);
    {
        let (session, _) = open_session(&state, &prefs);
        match body.choice {
            ConsentChoice::All => session.consent().accept_all(),
            ConsentChoice::Essential => session.consent().accept_essential(),
        }
    }

    // Render from the recorded choice so a revoked grant leaves no tag behind.
    let (session, head) = open_session(&state, &prefs);
    let view = SessionView::new(&session, &head);
    prefs.apply_cookies(Json(view).into_response())
}

pub async fn send_email(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<LanguageQuery>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    // Raw JSON first: the pipeline checks the honeypot before field types.
    let Json(body) = payload.map_err(|e| ApiError::invalid_body(e.body_text()))?;
    let language = RequestPreferences::from_request(&headers, &query).language();

    let ack = state
        .contact
        .submit_json(body)
        .await
        .map_err(|e| ApiError::from_contact(e, &state.translations, language))?;

    Ok(Json(json!({ "message": ack.message() })))
}

pub async fn testimonials(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<LanguageQuery>,
) -> Json<Vec<Testimonial>> {
    let language = RequestPreferences::from_request(&headers, &query).language();
    let items = fetch_testimonials(&state.http, state.config.testimonials_url.as_deref()).await;
    info!("Serving {} testimonials in {}", items.len(), language);

    Json(
        items
            .iter()
            .map(|item| item.localized(&state.translations, language))
            .collect(),
    )
}
