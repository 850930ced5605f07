//! Backend for a senior-residence brochure site.
//!
//! Serves the translation tables and a visitor's session state (language,
//! cookie consent, consent-gated analytics), forwards contact form messages
//! to the operators and exposes the testimonials.

pub mod analytics;
pub mod config;
pub mod consent;
pub mod contact;
pub mod html;
pub mod i18n;
pub mod server;
pub mod session;
pub mod site;
pub mod storage;
pub mod testimonials;
