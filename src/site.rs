//! Composition root: one instance of every piece of page state, wired to a
//! single translation context.

use crate::config::{Config, ExternalLinks};
use crate::contact::{ContactClient, ContactForm, ContactSubmission, FormStatus};
use crate::countdown::{Clock, Countdown, CountdownHandle, CountdownState, SystemClock};
use crate::i18n::{Language, TranslationContext};
use crate::navigation::{LanguageSwitcher, NavMenu, Section};
use crate::page;
use crate::preview::HeroPreview;
use crate::showcase::{DocumentScroll, Plan, PlanShowcase, ShowcaseError};
use crate::storage::LocaleStore;
use tracing::info;

/// The whole page's state.
///
/// Must be built inside a tokio runtime: the countdown ticker is spawned on
/// construction and stopped when the site is dropped.
pub struct Site<S: LocaleStore> {
    context: TranslationContext<S>,
    nav: NavMenu,
    switcher: LanguageSwitcher,
    preview: HeroPreview,
    scroll: DocumentScroll,
    showcase: PlanShowcase<DocumentScroll>,
    countdown: CountdownHandle,
    contact: ContactForm,
    links: ExternalLinks,
}

impl<S: LocaleStore> Site<S> {
    pub fn new(config: &Config, store: S) -> Self {
        Self::with_clock(config, store, SystemClock)
    }

    pub fn with_clock<C: Clock>(config: &Config, store: S, clock: C) -> Self {
        let context = TranslationContext::new(store);
        let scroll = DocumentScroll::new();
        let contact = ContactForm::new(
            ContactClient::new(config.form_endpoint.clone(), config.form_metadata.clone()),
            config.form_reset_delay,
        );

        info!(
            "Site ready (language: {}, countdown target: {})",
            context.language(),
            config.countdown_target
        );

        Self {
            context,
            nav: NavMenu::new(),
            switcher: LanguageSwitcher::new(),
            preview: HeroPreview::new(),
            showcase: PlanShowcase::new(scroll.clone()),
            scroll,
            countdown: Countdown::spawn(config.countdown_target, clock),
            contact,
            links: config.links.clone(),
        }
    }

    pub fn context(&self) -> &TranslationContext<S> {
        &self.context
    }

    pub fn language(&self) -> Language {
        self.context.language()
    }

    /// Switch language from the header dropdown. Also closes the mobile menu.
    pub fn choose_language(&mut self, language: Language) {
        self.switcher.choose(language, &mut self.context);
        self.nav.close();
    }

    /// Switch language from a raw code such as a command-line argument.
    pub fn choose_language_code(&mut self, code: &str) -> anyhow::Result<Language> {
        let language = Language::from_code(code)?;
        self.choose_language(language);
        Ok(language)
    }

    pub fn nav(&self) -> &NavMenu {
        &self.nav
    }

    pub fn nav_mut(&mut self) -> &mut NavMenu {
        &mut self.nav
    }

    /// Follow a header link and return the anchor to scroll to.
    pub fn navigate(&mut self, section: Section) -> &'static str {
        self.switcher.close();
        self.nav.navigate(section)
    }

    pub fn switcher(&self) -> &LanguageSwitcher {
        &self.switcher
    }

    pub fn switcher_mut(&mut self) -> &mut LanguageSwitcher {
        &mut self.switcher
    }

    pub fn preview(&self) -> &HeroPreview {
        &self.preview
    }

    pub fn preview_mut(&mut self) -> &mut HeroPreview {
        &mut self.preview
    }

    pub fn showcase(&self) -> &PlanShowcase<DocumentScroll> {
        &self.showcase
    }

    pub fn open_plan(&mut self, index: usize) -> Result<&'static Plan, ShowcaseError> {
        self.showcase.select(index)
    }

    pub fn close_plan(&mut self) {
        self.showcase.clear();
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll.is_locked()
    }

    pub fn countdown(&self) -> CountdownState {
        self.countdown.current()
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub async fn submit_contact(&self, submission: &ContactSubmission) -> FormStatus {
        self.contact.submit(submission).await
    }

    pub fn links(&self) -> &ExternalLinks {
        &self.links
    }

    /// Plain-text rendering of the page in the active language.
    pub fn render(&self) -> String {
        page::render_page(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormMetadata;
    use crate::storage::MemoryStore;
    use chrono::{DateTime, Duration as ChronoDuration, Utc};
    use reqwest::Url;
    use std::path::PathBuf;
    use std::time::Duration;

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn test_config(target: DateTime<Utc>) -> Config {
        Config {
            form_endpoint: Url::parse("http://127.0.0.1:1/f/test").expect("url"),
            form_metadata: FormMetadata {
                reply_to: "studio@example.com".to_string(),
                subject: "New inquiry".to_string(),
                form_name: "contact".to_string(),
            },
            form_reset_delay: Duration::from_secs(5),
            storage_path: PathBuf::from("unused.json"),
            countdown_target: target,
            links: ExternalLinks {
                survey: Url::parse("https://forms.example.com/survey").expect("url"),
                booking: Url::parse("https://booking.example.com/consultation").expect("url"),
                payment: Url::parse("https://pay.example.com/checkout").expect("url"),
            },
        }
    }

    fn create_site(store: MemoryStore) -> Site<MemoryStore> {
        let now = Utc::now();
        Site::with_clock(
            &test_config(now + ChronoDuration::days(3)),
            store,
            FixedClock(now),
        )
    }

    #[tokio::test]
    async fn test_site_starts_in_default_language() {
        let site = create_site(MemoryStore::new());
        assert_eq!(site.language(), Language::Ja);
        assert!(!site.nav().is_open());
        assert!(!site.showcase().is_open());
        assert!(!site.is_scroll_locked());
    }

    #[tokio::test]
    async fn test_site_restores_persisted_language() {
        let site = create_site(MemoryStore::with_entry("language", "ko"));
        assert_eq!(site.language(), Language::Ko);
    }

    #[tokio::test]
    async fn test_choose_language_closes_menus() {
        let mut site = create_site(MemoryStore::new());
        site.nav_mut().toggle();
        site.switcher_mut().toggle();

        site.choose_language(Language::En);

        assert_eq!(site.language(), Language::En);
        assert!(!site.nav().is_open());
        assert!(!site.switcher().is_open());
        assert_eq!(site.context().store().get("language"), Some("en".to_string()));
    }

    #[tokio::test]
    async fn test_choose_language_code_rejects_unknown() {
        let mut site = create_site(MemoryStore::new());
        assert!(site.choose_language_code("fr").is_err());
        assert_eq!(site.language(), Language::Ja);

        assert_eq!(site.choose_language_code("ko").unwrap(), Language::Ko);
    }

    #[tokio::test]
    async fn test_plan_modal_locks_scroll() {
        let mut site = create_site(MemoryStore::new());

        let plan = site.open_plan(1).unwrap();
        assert_eq!(plan.id, "standard");
        assert!(site.is_scroll_locked());

        site.close_plan();
        assert!(!site.is_scroll_locked());
    }

    #[tokio::test]
    async fn test_out_of_range_plan_keeps_scroll() {
        let mut site = create_site(MemoryStore::new());
        assert!(site.open_plan(7).is_err());
        assert!(!site.is_scroll_locked());
    }

    #[tokio::test]
    async fn test_countdown_running_on_construction() {
        let site = create_site(MemoryStore::new());
        let state = site.countdown();
        assert!(!state.is_expired());
        assert_eq!(state.remaining().days, 3);
    }

    #[tokio::test]
    async fn test_navigate_closes_switcher() {
        let mut site = create_site(MemoryStore::new());
        site.switcher_mut().toggle();
        assert_eq!(site.navigate(Section::Plans), "#plans");
        assert!(!site.switcher().is_open());
    }
}
