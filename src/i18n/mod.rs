//! Internationalization (i18n) module for multi-language support.
//!
//! All language-related logic and localized strings live here.
//!
//! # Architecture
//!
//! - `registry`: Metadata for the supported languages
//! - `language`: Closed `Language` enum with validated construction from codes
//! - `catalog`: Embedded key → string dictionaries, one per language
//! - `context`: `TranslationContext`, the injected owner of the active language
//! - `validator`: Catalog completeness and placeholder checks
//! - `metrics`: Lookup/fallback counters per context
//!
//! # Example
//!
//! ```rust,ignore
//! use studio_site::i18n::{Language, TranslationContext};
//! use studio_site::storage::MemoryStore;
//!
//! let mut context = TranslationContext::new(MemoryStore::new());
//! context.set_language(Language::En);
//! assert_eq!(context.t("plansTitle"), "Plans");
//! ```

mod catalog;
mod context;
mod language;
mod metrics;
mod registry;
mod validator;

pub use catalog::{format_text, Catalog, Dictionary};
pub use context::{TranslationContext, STORAGE_KEY};
pub use language::Language;
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use validator::{CatalogValidator, ValidationReport};
