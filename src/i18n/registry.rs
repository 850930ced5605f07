//! Language registry: metadata for every supported language.
//!
//! Initialized once behind a `OnceLock` and immutable afterwards.

use crate::i18n::Language;
use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    pub language: Language,

    /// ISO 639-1 language code (e.g., "es", "pt")
    pub code: &'static str,

    /// English name of the language (e.g., "Spanish")
    pub name: &'static str,

    /// Whether lookups fall back to this language (exactly one should be true)
    pub is_fallback: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// The fallback language configuration.
    ///
    /// # Panics
    /// Panics if zero or several languages are marked as fallback.
    pub fn fallback(&self) -> &LanguageConfig {
        let fallback: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_fallback)
            .collect();

        match fallback.len() {
            0 => panic!("No fallback language found in registry"),
            1 => fallback[0],
            _ => panic!("Multiple fallback languages found in registry"),
        }
    }
}

fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            language: Language::Spanish,
            code: "es",
            name: "Spanish",
            is_fallback: true,
        },
        LanguageConfig {
            language: Language::English,
            code: "en",
            name: "English",
            is_fallback: false,
        },
        LanguageConfig {
            language: Language::Portuguese,
            code: "pt",
            name: "Portuguese",
            is_fallback: false,
        },
        LanguageConfig {
            language: Language::French,
            code: "fr",
            name: "French",
            is_fallback: false,
        },
        LanguageConfig {
            language: Language::Italian,
            code: "it",
            name: "Italian",
            is_fallback: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();
        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_every_variant_registered_with_matching_code() {
        let registry = LanguageRegistry::get();
        for language in Language::ALL {
            let config = registry.get_by_code(language.code()).expect("registered");
            assert_eq!(config.language, language);
        }
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LanguageRegistry::get().get_by_code("de").is_none());
    }

    #[test]
    fn test_exactly_one_fallback() {
        let registry = LanguageRegistry::get();
        let count = Language::ALL
            .iter()
            .filter_map(|language| registry.get_by_code(language.code()))
            .filter(|config| config.is_fallback)
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_fallback_is_spanish() {
        let fallback = LanguageRegistry::get().fallback();
        assert_eq!(fallback.code, "es");
        assert!(fallback.is_fallback);
    }
}
