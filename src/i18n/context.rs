//! Translation context: the active language for one session.
//!
//! The context is built once by the composition root and handed to every
//! consumer. It restores the persisted language on construction and writes
//! it back through its `LocaleStore` on every change.

use crate::i18n::{format_text, Catalog, Dictionary, Language, TranslationMetrics};
use crate::storage::LocaleStore;
use anyhow::Result;
use tracing::{debug, info, warn};

/// Storage key under which the selected language code is persisted.
pub const STORAGE_KEY: &str = "language";

pub struct TranslationContext<S> {
    store: S,
    language: Language,
    metrics: TranslationMetrics,
}

impl<S: LocaleStore> TranslationContext<S> {
    /// Create a context, restoring the persisted language.
    ///
    /// A missing, unreadable or unsupported persisted value silently falls
    /// back to `Language::DEFAULT`.
    pub fn new(store: S) -> Self {
        let language = restore_language(&store);
        info!("Active language: {}", language.name());

        Self {
            store,
            language,
            metrics: TranslationMetrics::new(),
        }
    }

    /// The active language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Change the active language and persist the choice.
    ///
    /// The change is visible to the very next read. A storage failure is
    /// logged and does not undo the in-memory change.
    pub fn set_language(&mut self, language: Language) {
        if let Err(e) = self.store.save(STORAGE_KEY, language.code()) {
            warn!("Failed to persist language '{}': {}", language.code(), e);
        }

        if self.language != language {
            info!(
                "Language changed: {} -> {}",
                self.language.code(),
                language.code()
            );
            self.metrics.record_switch();
        }
        self.language = language;
    }

    /// Validate a raw language code and make it active.
    ///
    /// # Returns
    /// * `Ok(Language)` with the new active language
    /// * `Err` if the code is not supported; the active language is unchanged
    pub fn set_language_code(&mut self, code: &str) -> Result<Language> {
        let language = Language::from_code(code)?;
        self.set_language(language);
        Ok(language)
    }

    /// The dictionary for the active language.
    pub fn dictionary(&self) -> &'static Dictionary {
        Catalog::lookup(self.language)
    }

    /// Translate a key in the active language.
    ///
    /// Keys missing from the active dictionary are served from the default
    /// language; keys no dictionary knows are returned as-is.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        self.resolve(self.dictionary(), Catalog::reference(), key)
    }

    fn resolve<'a>(&self, active: &Dictionary, reference: &Dictionary, key: &'a str) -> &'a str {
        match lookup_with_fallback(active, reference, key) {
            Lookup::Hit(text) => {
                self.metrics.record_hit();
                text
            }
            Lookup::Fallback(text) => {
                warn!(
                    "Key '{}' missing for {}, using {}",
                    key,
                    active.language().code(),
                    reference.language().code()
                );
                self.metrics.record_fallback();
                text
            }
            Lookup::Missing => {
                warn!("Unknown translation key '{}'", key);
                self.metrics.record_missing();
                key
            }
        }
    }

    /// Translate a key and fill its `{placeholders}`.
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        format_text(self.t(key), args)
    }

    pub fn metrics(&self) -> &TranslationMetrics {
        &self.metrics
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Where a translated string was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lookup {
    Hit(&'static str),
    Fallback(&'static str),
    Missing,
}

/// Look a key up in the active dictionary, then in the reference one.
fn lookup_with_fallback(active: &Dictionary, reference: &Dictionary, key: &str) -> Lookup {
    if let Some(text) = active.get(key) {
        return Lookup::Hit(text);
    }
    match reference.get(key) {
        Some(text) => Lookup::Fallback(text),
        None => Lookup::Missing,
    }
}

fn restore_language<S: LocaleStore>(store: &S) -> Language {
    match store.load(STORAGE_KEY) {
        Ok(Some(code)) => match Language::from_code(&code) {
            Ok(language) => language,
            Err(e) => {
                warn!("Ignoring persisted language: {}", e);
                Language::DEFAULT
            }
        },
        Ok(None) => {
            debug!("No persisted language, using default");
            Language::DEFAULT
        }
        Err(e) => {
            warn!("Could not read persisted language: {}", e);
            Language::DEFAULT
        }
    }
}
