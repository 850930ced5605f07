//! Language type: the closed set of languages the site is published in.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A supported site language.
///
/// The set is fixed at compile time. `Spanish` is the fallback language used
/// when nothing else can be resolved and when a translation is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "en")]
    English,
    #[serde(rename = "pt")]
    Portuguese,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "it")]
    Italian,
}

impl Language {
    /// Every supported language, fallback first.
    pub const ALL: [Language; 5] = [
        Language::Spanish,
        Language::English,
        Language::Portuguese,
        Language::French,
        Language::Italian,
    ];

    /// Create a Language from a language code string.
    ///
    /// Codes are exact, lowercase ISO 639-1 codes as persisted by the site.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is supported
    /// * `Err` if the code is unknown
    ///
    /// # Example
    /// ```ignore
    /// let french = Language::from_code("fr")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Language> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) => Ok(config.language),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Lenient lookup used on untrusted input: `None` instead of an error.
    pub fn parse(code: &str) -> Option<Language> {
        Self::from_code(code).ok()
    }

    /// The fallback language (Spanish).
    pub fn fallback() -> Language {
        LanguageRegistry::get().fallback().language
    }

    /// ISO 639-1 code (e.g. "es", "en").
    pub fn code(&self) -> &'static str {
        match self {
            Language::Spanish => "es",
            Language::English => "en",
            Language::Portuguese => "pt",
            Language::French => "fr",
            Language::Italian => "it",
        }
    }

    pub(crate) fn index(&self) -> u8 {
        match self {
            Language::Spanish => 0,
            Language::English => 1,
            Language::Portuguese => 2,
            Language::French => 3,
            Language::Italian => 4,
        }
    }

    pub(crate) fn from_index(index: u8) -> Option<Language> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Full configuration from the registry.
    ///
    /// # Panics
    /// Panics if the registry has no entry for this variant, which would be a
    /// programming error in `registry.rs`.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code())
            .expect("every Language variant is registered")
    }

    /// English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::Spanish
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_all_supported() {
        for code in ["es", "en", "pt", "fr", "it"] {
            let language = Language::from_code(code).expect("Should succeed");
            assert_eq!(language.code(), code);
        }
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("de");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        assert!(Language::from_code("EN").is_err());
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_parse_returns_none_for_unknown() {
        assert_eq!(Language::parse("xx"), None);
        assert_eq!(Language::parse("pt"), Some(Language::Portuguese));
    }

    // ==================== fallback Tests ====================

    #[test]
    fn test_fallback_is_spanish() {
        assert_eq!(Language::fallback(), Language::Spanish);
        assert_eq!(Language::default(), Language::fallback());
    }

    // ==================== Metadata Tests ====================

    #[test]
    fn test_names() {
        assert_eq!(Language::Spanish.name(), "Spanish");
        assert_eq!(Language::Portuguese.name(), "Portuguese");
        assert_eq!(Language::Italian.name(), "Italian");
    }

    #[test]
    fn test_index_roundtrip() {
        for language in Language::ALL {
            assert_eq!(Language::from_index(language.index()), Some(language));
        }
        assert_eq!(Language::from_index(42), None);
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_display_is_code() {
        assert_eq!(Language::French.to_string(), "fr");
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&Language::Italian).unwrap();
        assert_eq!(json, "\"it\"");

        let parsed: Language = serde_json::from_str("\"pt\"").unwrap();
        assert_eq!(parsed, Language::Portuguese);

        assert!(serde_json::from_str::<Language>("\"de\"").is_err());
    }
}
