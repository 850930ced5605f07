//! Contact form payload and its validation rules.

use crate::i18n::{interpolate, Language, MessageKey, TranslationTable};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

/// Raw contact form submission.
///
/// Missing fields deserialize as empty strings so they fail validation with a
/// field error instead of a body rejection. `_confirm` is the honeypot field:
/// hidden from people, filled in by bots. Bots put anything there, so it
/// accepts any JSON value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, rename = "_confirm")]
    pub honeypot: Option<Value>,
}

/// Name of the honeypot field in the request body.
pub const HONEYPOT_FIELD: &str = "_confirm";

impl ContactSubmission {
    pub fn is_spam(&self) -> bool {
        self.honeypot.as_ref().is_some_and(is_filled)
    }
}

/// Whether a raw request body has a filled honeypot.
///
/// Checked before the body is parsed into a [`ContactSubmission`], so a bot
/// sending badly typed fields still gets the normal success answer.
pub fn honeypot_filled(body: &Value) -> bool {
    body.get(HONEYPOT_FIELD).is_some_and(is_filled)
}

/// `null`, `false`, `0` and `""` count as empty; anything else is filled.
fn is_filled(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// A submission that passed validation. The honeypot is gone by now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    TooShort { min: usize },
    TooLong { max: usize },
    InvalidEmail,
}

/// Field-level validation failures, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, Vec<Violation>>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: Field, violation: Violation) {
        self.errors.entry(field).or_default().push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: Field) -> &[Violation] {
        self.errors.get(&field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    /// Human-readable messages per field, in `language`.
    pub fn localized(
        &self,
        table: &TranslationTable,
        language: Language,
    ) -> BTreeMap<&'static str, Vec<String>> {
        self.errors
            .iter()
            .map(|(field, violations)| {
                let messages = violations
                    .iter()
                    .map(|violation| describe(*field, *violation, table, language))
                    .collect();
                (field.as_str(), messages)
            })
            .collect()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|(field, violations)| format!("{} {:?}", field.as_str(), violations))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

fn describe(field: Field, violation: Violation, table: &TranslationTable, language: Language) -> String {
    match violation {
        Violation::InvalidEmail => table.t(language, MessageKey::ValidationEmailInvalid).to_string(),
        Violation::TooShort { min } => {
            let key = match field {
                Field::Name => MessageKey::ValidationNameMin,
                Field::Email => MessageKey::ValidationEmailInvalid,
                Field::Phone => MessageKey::ValidationPhoneMin,
                Field::Message => MessageKey::ValidationMessageMin,
            };
            interpolate(table.t(language, key), &[("min", &min.to_string())])
        }
        Violation::TooLong { max } => interpolate(
            table.t(language, MessageKey::ValidationMessageMax),
            &[("max", &max.to_string())],
        ),
    }
}

/// Validation thresholds, counted in characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactPolicy {
    pub name_min: usize,
    pub phone_min: usize,
    pub message_min: usize,
    pub message_max: usize,
}

impl Default for ContactPolicy {
    fn default() -> Self {
        Self {
            name_min: 2,
            phone_min: 9,
            message_min: 10,
            message_max: 500,
        }
    }
}

impl ContactPolicy {
    /// Check every field and collect all violations.
    pub fn validate(&self, submission: &ContactSubmission) -> Result<ValidContact, FieldErrors> {
        let mut errors = FieldErrors::new();

        if submission.name.chars().count() < self.name_min {
            errors.push(Field::Name, Violation::TooShort { min: self.name_min });
        }

        if !is_valid_email(&submission.email) {
            errors.push(Field::Email, Violation::InvalidEmail);
        }

        if submission.phone.chars().count() < self.phone_min {
            errors.push(Field::Phone, Violation::TooShort { min: self.phone_min });
        }

        let message_len = submission.message.chars().count();
        if message_len < self.message_min {
            errors.push(Field::Message, Violation::TooShort { min: self.message_min });
        } else if message_len > self.message_max {
            errors.push(Field::Message, Violation::TooLong { max: self.message_max });
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ValidContact {
            name: submission.name.clone(),
            email: submission.email.clone(),
            phone: submission.phone.clone(),
            message: submission.message.clone(),
        })
    }
}

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

/// Well-formed `local@domain.tld` address.
///
/// The local part may not start with a dot or contain `..`; the top-level
/// domain must be at least two letters.
pub fn is_valid_email(email: &str) -> bool {
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
            .expect("email regex is valid")
    });

    !email.starts_with('.') && !email.contains("..") && regex.is_match(email)
}
