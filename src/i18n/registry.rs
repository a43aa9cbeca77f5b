//! Language registry: Single source of truth for language metadata.
//!
//! The registry is immutable static data. It uses `OnceLock` for lazy,
//! thread-safe initialization; the mutable "active language" lives in
//! `TranslationContext`, never here.

use crate::i18n::Language;
use std::sync::OnceLock;

/// Metadata for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// The language this entry describes
    pub language: Language,

    /// ISO 639-1 language code (e.g., "ja", "en", "ko")
    pub code: &'static str,

    /// English name of the language (e.g., "Japanese", "Korean")
    pub name: &'static str,

    /// Native name of the language, shown in the language switcher
    pub native_name: &'static str,
}

/// Global language registry.
pub struct LanguageRegistry {
    languages: [LanguageConfig; 3],
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the code is supported
    /// * `None` otherwise
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get the configuration for a language.
    pub fn config(&self, language: Language) -> &LanguageConfig {
        &self.languages[Self::slot(language)]
    }

    /// Get all languages in switcher order.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the default language configuration.
    pub fn default_config(&self) -> &LanguageConfig {
        self.config(Language::DEFAULT)
    }

    /// Check if a language code is supported.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }

    fn slot(language: Language) -> usize {
        match language {
            Language::Ja => 0,
            Language::En => 1,
            Language::Ko => 2,
        }
    }
}

/// Language configurations, ordered to match `LanguageRegistry::slot`.
fn default_languages() -> [LanguageConfig; 3] {
    [
        LanguageConfig {
            language: Language::Ja,
            code: "ja",
            name: "Japanese",
            native_name: "日本語",
        },
        LanguageConfig {
            language: Language::En,
            code: "en",
            name: "English",
            native_name: "English",
        },
        LanguageConfig {
            language: Language::Ko,
            code: "ko",
            name: "Korean",
            native_name: "한국어",
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
    fn test_get_by_code_japanese() {
        let config = LanguageRegistry::get()
            .get_by_code("ja")
            .expect("ja should be registered");

        assert_eq!(config.language, Language::Ja);
        assert_eq!(config.name, "Japanese");
        assert_eq!(config.native_name, "日本語");
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LanguageRegistry::get().get_by_code("es").is_none());
    }

    #[test]
    fn test_config_slots_match_language() {
        let registry = LanguageRegistry::get();
        for language in Language::ALL {
            let config = registry.config(language);
            assert_eq!(config.language, language);
            assert_eq!(config.code, language.code());
        }
    }

    #[test]
    fn test_list_all_in_switcher_order() {
        let codes: Vec<_> = LanguageRegistry::get()
            .list_all()
            .iter()
            .map(|c| c.code)
            .collect();
        assert_eq!(codes, vec!["ja", "en", "ko"]);
    }

    #[test]
    fn test_default_config_is_japanese() {
        assert_eq!(LanguageRegistry::get().default_config().code, "ja");
    }

    #[test]
    fn test_is_supported() {
        let registry = LanguageRegistry::get();
        assert!(registry.is_supported("ko"));
        assert!(!registry.is_supported("zh"));
    }
}
