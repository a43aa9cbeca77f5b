//! Header navigation: section anchors, the mobile menu and the language switcher.

use crate::i18n::{Language, TranslationContext};
use crate::storage::LocaleStore;
use tracing::debug;

/// Page sections reachable from the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Plans,
    Showcase,
    Testimonials,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Plans,
        Section::Showcase,
        Section::Testimonials,
        Section::Contact,
    ];

    /// In-page anchor (e.g., "#plans").
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Plans => "#plans",
            Section::Showcase => "#showcase",
            Section::Testimonials => "#testimonials",
            Section::Contact => "#contact",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            Section::Plans => "navPlans",
            Section::Showcase => "navShowcase",
            Section::Testimonials => "navTestimonials",
            Section::Contact => "navContact",
        }
    }
}

/// Mobile navigation menu.
#[derive(Debug, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Follow a menu link: closes the menu and returns the anchor to scroll to.
    pub fn navigate(&mut self, section: Section) -> &'static str {
        self.open = false;
        debug!("Navigating to {}", section.anchor());
        section.anchor()
    }

    /// Label key for the menu button in its current state.
    pub fn button_label_key(&self) -> &'static str {
        if self.open {
            "navMenuClose"
        } else {
            "navMenuOpen"
        }
    }
}

/// Dropdown that lists the supported languages.
///
/// Owns only its open flag; the language itself lives in the context.
#[derive(Debug, Default)]
pub struct LanguageSwitcher {
    open: bool,
}

impl LanguageSwitcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Pick a language from the dropdown and close it.
    pub fn choose<S: LocaleStore>(
        &mut self,
        language: Language,
        context: &mut TranslationContext<S>,
    ) {
        context.set_language(language);
        self.open = false;
    }

    /// Options in display order, with the active one flagged.
    pub fn options<S: LocaleStore>(
        &self,
        context: &TranslationContext<S>,
    ) -> Vec<(Language, bool)> {
        Language::ALL
            .iter()
            .map(|&language| (language, language == context.language()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    // ==================== NavMenu Tests ====================

    #[test]
    fn test_menu_starts_closed() {
        let menu = NavMenu::new();
        assert!(!menu.is_open());
        assert_eq!(menu.button_label_key(), "navMenuOpen");
    }

    #[test]
    fn test_menu_toggle() {
        let mut menu = NavMenu::new();
        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.button_label_key(), "navMenuClose");
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_navigate_closes_menu() {
        let mut menu = NavMenu::new();
        menu.toggle();
        let anchor = menu.navigate(Section::Contact);
        assert_eq!(anchor, "#contact");
        assert!(!menu.is_open());
    }

    #[test]
    fn test_section_keys_exist_in_catalog() {
        let reference = crate::i18n::Catalog::reference();
        for section in Section::ALL {
            assert!(reference.contains(section.label_key()));
            assert!(section.anchor().starts_with('#'));
        }
    }

    // ==================== LanguageSwitcher Tests ====================

    #[test]
    fn test_choose_sets_language_and_closes() {
        let mut context = TranslationContext::new(MemoryStore::new());
        let mut switcher = LanguageSwitcher::new();

        switcher.toggle();
        assert!(switcher.is_open());

        switcher.choose(Language::Ko, &mut context);
        assert_eq!(context.language(), Language::Ko);
        assert!(!switcher.is_open());
    }

    #[test]
    fn test_options_flag_active_language() {
        let mut context = TranslationContext::new(MemoryStore::new());
        context.set_language(Language::En);

        let options = LanguageSwitcher::new().options(&context);
        assert_eq!(
            options,
            vec![
                (Language::Ja, false),
                (Language::En, true),
                (Language::Ko, false)
            ]
        );
    }

    #[test]
    fn test_close() {
        let mut switcher = LanguageSwitcher::new();
        switcher.toggle();
        switcher.close();
        assert!(!switcher.is_open());
    }
}
