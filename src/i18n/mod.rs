//! Internationalization (i18n) for the site.
//!
//! # Architecture
//!
//! - `language`: the closed `Language` enum (es, en, pt, fr, it)
//! - `registry`: language metadata, including which language is the fallback
//! - `strings`: `MessageKey` and the built-in catalogs
//! - `table`: `TranslationTable` and the three-tier `t` lookup
//! - `resolver`: picks a session's initial language
//! - `state`: the session's active language, write-through on change
//! - `validator`: coverage report for content review
//! - `metrics`: lookup counters
//!
//! # Example
//!
//! ```rust,ignore
//! use residencia_web::i18n::{Language, MessageKey, TranslationTable};
//!
//! let table = TranslationTable::builtin();
//! assert_eq!(table.t(Language::English, MessageKey::ContactName), "Name");
//! ```

mod language;
mod metrics;
mod registry;
mod resolver;
mod state;
mod strings;
mod table;
mod validator;

pub use language::Language;
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use resolver::{preferred_locale, primary_subtag, LanguageResolver, LanguageSource};
pub use state::LanguageState;
pub use strings::MessageKey;
pub use table::{interpolate, TranslationTable};
pub use validator::{TranslationValidator, ValidationReport};
