//! Catalog quality validation.
//!
//! Checks every dictionary against the default-language reference: missing
//! keys, keys the reference does not know, duplicate keys, empty strings,
//! and `{placeholder}` sets that differ from the reference.

use crate::i18n::{Catalog, Dictionary, Language};
use regex::Regex;
use std::collections::{BTreeSet, HashSet};
use std::sync::OnceLock;

/// Validation report containing errors and warnings about the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make a language incomplete or broken
    pub errors: Vec<String>,

    /// Non-critical issues
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for the embedded translation catalog.
pub struct CatalogValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl CatalogValidator {
    /// Validate every supported language against the reference dictionary.
    pub fn validate_catalog() -> ValidationReport {
        let reference = Catalog::reference();
        let mut report = Self::check_duplicates(reference);

        for language in Language::ALL {
            if language == reference.language() {
                continue;
            }
            report.merge(Self::validate(reference, Catalog::lookup(language)));
        }

        for language in Language::ALL {
            report.merge(Self::check_empty(Catalog::lookup(language)));
        }

        report
    }

    /// Validate one dictionary against a reference dictionary.
    ///
    /// Errors: reference keys missing from `candidate`, placeholder
    /// mismatches, duplicate keys. Warnings: keys the reference lacks.
    pub fn validate(reference: &Dictionary, candidate: &Dictionary) -> ValidationReport {
        let mut report = Self::check_duplicates(candidate);
        let code = candidate.language().code();

        for (key, reference_text) in reference.entries() {
            match candidate.get(key) {
                None => report
                    .errors
                    .push(format!("[{}] missing key '{}'", code, key)),
                Some(text) => {
                    let expected = Self::extract_placeholders(reference_text);
                    let actual = Self::extract_placeholders(text);
                    if expected != actual {
                        report.errors.push(format!(
                            "[{}] placeholder mismatch in '{}': reference has {:?}, translation has {:?}",
                            code, key, expected, actual
                        ));
                    }
                }
            }
        }

        for key in candidate.keys() {
            if !reference.contains(key) {
                report
                    .warnings
                    .push(format!("[{}] key '{}' is not in the reference", code, key));
            }
        }

        report
    }

    fn check_duplicates(dictionary: &Dictionary) -> ValidationReport {
        let mut report = ValidationReport::new();
        let mut seen = HashSet::new();
        for key in dictionary.keys() {
            if !seen.insert(key) {
                report.errors.push(format!(
                    "[{}] duplicate key '{}'",
                    dictionary.language().code(),
                    key
                ));
            }
        }
        report
    }

    fn check_empty(dictionary: &Dictionary) -> ValidationReport {
        let mut report = ValidationReport::new();
        for (key, text) in dictionary.entries() {
            if text.trim().is_empty() {
                report.warnings.push(format!(
                    "[{}] key '{}' has an empty translation",
                    dictionary.language().code(),
                    key
                ));
            }
        }
        report
    }

    /// Extract the set of `{name}` placeholders from text
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex =
            PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{([a-zA-Z_][a-zA-Z0-9_]*)\}").unwrap());

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static REFERENCE: Dictionary = Dictionary::from_entries(
        Language::Ja,
        &[
            ("title", "タイトル"),
            ("price", "{price}円〜"),
            ("footer", "© {year}"),
        ],
    );

    // ==================== Placeholder Extraction Tests ====================

    #[test]
    fn test_extract_placeholders_single() {
        let found = CatalogValidator::extract_placeholders("From ¥{price}");
        assert_eq!(found.into_iter().collect::<Vec<_>>(), vec!["price"]);
    }

    #[test]
    fn test_extract_placeholders_multiple_sorted() {
        let found = CatalogValidator::extract_placeholders("{year} {field} {year}");
        assert_eq!(found.into_iter().collect::<Vec<_>>(), vec!["field", "year"]);
    }

    #[test]
    fn test_extract_placeholders_none() {
        assert!(CatalogValidator::extract_placeholders("No braces here").is_empty());
    }

    #[test]
    fn test_extract_placeholders_ignores_non_identifiers() {
        assert!(CatalogValidator::extract_placeholders("{} { price } {1x}").is_empty());
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_validate_complete_translation() {
        static CANDIDATE: Dictionary = Dictionary::from_entries(
            Language::En,
            &[
                ("title", "Title"),
                ("price", "From ¥{price}"),
                ("footer", "© {year}"),
            ],
        );

        let report = CatalogValidator::validate(&REFERENCE, &CANDIDATE);
        assert!(report.is_clean(), "{:?}", report);
    }

    #[test]
    fn test_validate_missing_key() {
        static CANDIDATE: Dictionary = Dictionary::from_entries(
            Language::En,
            &[("title", "Title"), ("price", "From ¥{price}")],
        );

        let report = CatalogValidator::validate(&REFERENCE, &CANDIDATE);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("missing key 'footer'"));
    }

    #[test]
    fn test_validate_placeholder_mismatch() {
        static CANDIDATE: Dictionary = Dictionary::from_entries(
            Language::Ko,
            &[
                ("title", "제목"),
                ("price", "{cost}엔부터"),
                ("footer", "© {year}"),
            ],
        );

        let report = CatalogValidator::validate(&REFERENCE, &CANDIDATE);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("placeholder mismatch in 'price'"));
    }

    #[test]
    fn test_validate_extra_key_is_warning() {
        static CANDIDATE: Dictionary = Dictionary::from_entries(
            Language::En,
            &[
                ("title", "Title"),
                ("price", "From ¥{price}"),
                ("footer", "© {year}"),
                ("bonus", "Bonus"),
            ],
        );

        let report = CatalogValidator::validate(&REFERENCE, &CANDIDATE);
        assert!(!report.has_errors());
        assert!(report.warnings[0].contains("'bonus'"));
    }

    #[test]
    fn test_validate_duplicate_key() {
        static CANDIDATE: Dictionary = Dictionary::from_entries(
            Language::En,
            &[
                ("title", "Title"),
                ("title", "Again"),
                ("price", "From ¥{price}"),
                ("footer", "© {year}"),
            ],
        );

        let report = CatalogValidator::validate(&REFERENCE, &CANDIDATE);
        assert!(report.errors.iter().any(|e| e.contains("duplicate key 'title'")));
    }

    #[test]
    fn test_embedded_catalog_is_clean() {
        let report = CatalogValidator::validate_catalog();
        assert!(report.is_clean(), "catalog problems: {:?}", report);
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_validation_report_new() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
    }

    #[test]
    fn test_validation_report_with_warning() {
        let mut report = ValidationReport::new();
        report.warnings.push("Test warning".to_string());

        assert!(!report.is_clean());
        assert!(!report.has_errors());
        assert!(report.has_warnings());
    }
}
