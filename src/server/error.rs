use crate::contact::ContactError;
use crate::i18n::{Language, TranslationTable};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{debug, error};

/// Client-facing text for request bodies that cannot be read.
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation error")]
    Validation(BTreeMap<&'static str, Vec<String>>),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// A body that could not be parsed. The parser's detail is only logged.
    pub fn invalid_body(detail: impl std::fmt::Display) -> Self {
        debug!("Rejected request body: {}", detail);
        ApiError::BadRequest(INVALID_BODY_MESSAGE.to_string())
    }

    /// Map a pipeline failure, localizing field errors into `language`.
    pub fn from_contact(err: ContactError, table: &TranslationTable, language: Language) -> Self {
        match err {
            ContactError::InvalidBody(detail) => ApiError::invalid_body(detail),
            ContactError::Validation(errors) => ApiError::Validation(errors.localized(table, language)),
            ContactError::Configuration(detail) => ApiError::Configuration(detail),
            ContactError::Transport(detail) => ApiError::Internal(detail),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(field_errors) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "errors": {
                        "formErrors": [],
                        "fieldErrors": field_errors,
                    }
                })),
            )
                .into_response(),
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "errors": {
                        "formErrors": [message],
                        "fieldErrors": {},
                    }
                })),
            )
                .into_response(),
            ApiError::NotFound(what) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": format!("Not found: {}", what) })),
            )
                .into_response(),
            // Details stay in the log; the client only sees a generic message.
            ApiError::Configuration(ref detail) => {
                error!("Server configuration error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Server configuration error" })),
                )
                    .into_response()
            }
            ApiError::Internal(ref detail) => {
                error!("Request failed: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Internal Server Error" })),
                )
                    .into_response()
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
