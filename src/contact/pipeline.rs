//! Contact submission pipeline: honeypot, validation, dispatch.

use crate::contact::{
    honeypot_filled, ContactPolicy, ContactSubmission, DispatchError, FieldErrors, Mailer, OutgoingEmail,
};
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("malformed submission: {0}")]
    InvalidBody(String),

    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("dispatch failed: {0}")]
    Transport(String),
}

impl From<DispatchError> for ContactError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::NotConfigured => ContactError::Configuration(err.to_string()),
            other => ContactError::Transport(other.to_string()),
        }
    }
}

/// Acknowledgement returned for every accepted submission, spam included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionAck;

impl SubmissionAck {
    pub fn message(&self) -> &'static str {
        "Message sent successfully!"
    }
}

/// Validates contact submissions and forwards them to the operators.
///
/// Holds no mutable state; concurrent `submit` calls are independent.
/// Duplicate submissions produce duplicate emails.
pub struct ContactPipeline<M> {
    mailer: M,
    policy: ContactPolicy,
    from: String,
    recipients: Vec<String>,
}

impl<M: Mailer> ContactPipeline<M> {
    pub fn new(mailer: M, policy: ContactPolicy, from: impl Into<String>, recipients: Vec<String>) -> Self {
        Self {
            mailer,
            policy,
            from: from.into(),
            recipients,
        }
    }

    pub fn mailer(&self) -> &M {
        &self.mailer
    }

    /// Process a raw JSON request body.
    ///
    /// The honeypot is read from the raw body first; only then is the body
    /// parsed, so field type errors are never reported to a bot.
    pub async fn submit_json(&self, body: Value) -> Result<SubmissionAck, ContactError> {
        if honeypot_filled(&body) {
            info!("Honeypot field filled, discarding contact submission");
            return Ok(SubmissionAck);
        }

        let submission: ContactSubmission =
            serde_json::from_value(body).map_err(|e| ContactError::InvalidBody(e.to_string()))?;
        self.submit(submission).await
    }

    /// Process one submission.
    ///
    /// A filled honeypot short-circuits with success and nothing is sent, so
    /// bots get no signal to adapt to.
    pub async fn submit(&self, submission: ContactSubmission) -> Result<SubmissionAck, ContactError> {
        if submission.is_spam() {
            info!("Honeypot field filled, discarding contact submission");
            return Ok(SubmissionAck);
        }

        let contact = self
            .policy
            .validate(&submission)
            .map_err(ContactError::Validation)?;

        if self.recipients.is_empty() {
            error!("No contact recipients configured");
            return Err(ContactError::Configuration("no recipients configured".to_string()));
        }

        let email = OutgoingEmail::contact_notification(&contact, &self.from, &self.recipients);
        if let Err(e) = self.mailer.send(&email).await {
            match &e {
                DispatchError::NotConfigured => error!("Contact email not sent: {}", e),
                _ => warn!("Contact email not sent: {}", e),
            }
            return Err(e.into());
        }

        info!("Contact message from '{}' forwarded", contact.name);
        Ok(SubmissionAck)
    }
}
