//! Contact form handling.
//!
//! - `form`: payload, thresholds and field validation
//! - `email`: rendering of the operator notification
//! - `mailer`: the dispatch collaborator (Resend)
//! - `pipeline`: honeypot, then validation, then a single dispatch attempt

mod email;
mod form;
mod mailer;
mod pipeline;

pub use email::OutgoingEmail;
pub use form::{
    honeypot_filled, is_valid_email, ContactPolicy, ContactSubmission, Field, FieldErrors, ValidContact, Violation,
};
pub use mailer::{DispatchError, Mailer, ResendMailer};
pub use pipeline::{ContactError, ContactPipeline, SubmissionAck};
