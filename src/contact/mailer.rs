//! Email dispatch collaborator.

use crate::contact::OutgoingEmail;
use std::future::Future;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("email dispatch is not configured (missing API key)")]
    NotConfigured,

    #[error("failed to reach email API: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("email API error ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Sends one email. Implementations make a single attempt, no retry.
pub trait Mailer: Send + Sync {
    fn send(&self, email: &OutgoingEmail) -> impl Future<Output = Result<(), DispatchError>> + Send;
}

/// Resend (`POST /emails`) client.
#[derive(Debug, Clone)]
pub struct ResendMailer {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl ResendMailer {
    pub fn new(client: reqwest::Client, api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            base_url: base_url.into(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!("{}/emails", self.base_url.trim_end_matches('/'))
    }
}

impl Mailer for ResendMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), DispatchError> {
        let api_key = self.api_key.as_deref().ok_or(DispatchError::NotConfigured)?;

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(email)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(DispatchError::Rejected { status, body });
        }

        info!("Email '{}' accepted for {} recipient(s)", email.subject, email.to.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{body_partial_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn email() -> OutgoingEmail {
        OutgoingEmail {
            from: "Web <web@residencia.test>".to_string(),
            to: vec!["info@residencia.test".to_string()],
            subject: "Nuevo mensaje de contacto: Ana".to_string(),
            html: "<p>hola</p>".to_string(),
            reply_to: Some("ana@example.com".to_string()),
        }
    }

    #[tokio::test]
    async fn test_send_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/emails"))
            .and(header("Authorization", "Bearer re_test_key"))
            .and(body_partial_json(serde_json::json!({
                "to": ["info@residencia.test"],
                "subject": "Nuevo mensaje de contacto: Ana"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "abc"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mailer = ResendMailer::new(
            reqwest::Client::new(),
            Some("re_test_key".to_string()),
            mock_server.uri(),
        );
        mailer.send(&email()).await.expect("should send");
    }

    #[tokio::test]
    async fn test_send_rejected_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/emails"))
            .respond_with(ResponseTemplate::new(422).set_body_string("invalid from address"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mailer = ResendMailer::new(reqwest::Client::new(), Some("key".to_string()), mock_server.uri());
        let err = mailer.send(&email()).await.unwrap_err();

        match err {
            DispatchError::Rejected { status, body } => {
                assert_eq!(status, 422);
                assert_eq!(body, "invalid from address");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_send_without_key_makes_no_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let mailer = ResendMailer::new(reqwest::Client::new(), Some("  ".to_string()), mock_server.uri());
        assert!(!mailer.is_configured());
        assert!(matches!(
            mailer.send(&email()).await,
            Err(DispatchError::NotConfigured)
        ));
    }

    #[tokio::test]
    async fn test_send_unreachable_is_transport_error() {
        // Reserve a port, then free it so nothing is listening there.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let mailer = ResendMailer::new(
            reqwest::Client::new(),
            Some("key".to_string()),
            format!("http://{}", addr),
        );
        assert!(matches!(
            mailer.send(&email()).await,
            Err(DispatchError::Transport(_))
        ));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let mailer = ResendMailer::new(reqwest::Client::new(), None, "https://api.resend.com/");
        assert_eq!(mailer.endpoint(), "https://api.resend.com/emails");
    }
}
