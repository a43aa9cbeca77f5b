//! Plain-text rendering of the page.
//!
//! Every visible string goes through the translation context, so the output
//! follows the active language the same way the live page does.

use crate::config::ExternalLinks;
use crate::contact::FormStatus;
use crate::countdown::CountdownState;
use crate::i18n::TranslationContext;
use crate::navigation::{LanguageSwitcher, NavMenu, Section};
use crate::preview::{HeroPreview, PreviewTab};
use crate::showcase::{format_price, DocumentScroll, Plan, PlanShowcase};
use crate::site::Site;
use crate::storage::LocaleStore;
use crate::testimonials::TESTIMONIALS;
use chrono::{Datelike, Utc};
use std::fmt::Write;

/// Render every section in page order, separated by blank lines.
pub fn render_page<S: LocaleStore>(site: &Site<S>) -> String {
    let context = site.context();
    let mut sections = vec![
        render_header(context, site.nav(), site.switcher()),
        render_hero(context, site.preview()),
        render_plans(context, site.showcase()),
    ];
    if let Some(plan) = site.showcase().selected_plan() {
        sections.push(render_plan_detail(context, plan));
    }
    sections.push(render_testimonials(context));
    sections.push(render_countdown(context, site.countdown()));
    sections.push(render_contact(context, &site.contact().status()));
    sections.push(render_links(context, site.links()));
    sections.push(render_footer(context, Utc::now().year()));

    sections.join("\n\n")
}

pub fn render_header<S: LocaleStore>(
    context: &TranslationContext<S>,
    nav: &NavMenu,
    switcher: &LanguageSwitcher,
) -> String {
    let mut out = String::new();

    let links: Vec<String> = Section::ALL
        .iter()
        .map(|section| format!("{} ({})", context.t(section.label_key()), section.anchor()))
        .collect();
    let _ = writeln!(out, "{}", links.join(" | "));

    let languages: Vec<String> = switcher
        .options(context)
        .into_iter()
        .map(|(language, active)| {
            if active {
                format!("[{}]", language.native_name())
            } else {
                language.native_name().to_string()
            }
        })
        .collect();
    let _ = write!(
        out,
        "{}: {}  ({})",
        context.t("languageLabel"),
        languages.join(" / "),
        context.t(nav.button_label_key())
    );

    out
}

pub fn render_hero<S: LocaleStore>(context: &TranslationContext<S>, preview: &HeroPreview) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", context.t("heroBadge"));
    let _ = writeln!(out, "# {}", context.t("heroTitle"));
    let _ = writeln!(out, "{}", context.t("heroSubtitle"));
    let _ = writeln!(
        out,
        "[{}] [{}]",
        context.t("heroCta"),
        context.t("heroSecondaryCta")
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "## {}", context.t("previewTitle"));

    let tabs: Vec<String> = PreviewTab::ALL
        .iter()
        .map(|&tab| {
            let label = context.t(tab.label_key());
            if tab == preview.tab() {
                format!("[{}]", label)
            } else {
                label.to_string()
            }
        })
        .collect();
    let _ = write!(out, "{}", tabs.join(" | "));

    for (index, step) in preview.steps().iter().enumerate() {
        let expanded = preview.expanded().is_selected(index);
        let marker = if expanded { "-" } else { "+" };
        let _ = write!(out, "\n{} {}. {}", marker, index + 1, context.t(step.title_key));
        if expanded {
            let _ = write!(out, "\n     {}", context.t(step.body_key));
        }
    }

    out
}

pub fn render_plans<S: LocaleStore>(
    context: &TranslationContext<S>,
    showcase: &PlanShowcase<DocumentScroll>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "## {}", context.t("plansTitle"));
    let _ = write!(out, "{}", context.t("plansSubtitle"));

    for plan in showcase.plans() {
        let _ = write!(out, "\n\n### {}", context.t(plan.name_key));
        if plan.highlighted {
            let _ = write!(out, " ({})", context.t("planPopular"));
        }
        let _ = write!(
            out,
            "\n{}\n{}",
            price_line(context, plan),
            context.t(plan.description_key)
        );
        let _ = write!(out, "\n[{}]", context.t("planViewDetails"));
    }

    out
}

pub fn render_plan_detail<S: LocaleStore>(context: &TranslationContext<S>, plan: &Plan) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {} ===", context.t(plan.name_key));
    let _ = writeln!(out, "{}", price_line(context, plan));
    let _ = writeln!(out, "{}:", context.t("showcaseIncludes"));
    for key in plan.feature_keys {
        let _ = writeln!(out, "  - {}", context.t(key));
    }
    let _ = write!(
        out,
        "[{}] [{}]",
        context.t("planApply"),
        context.t("showcaseClose")
    );
    out
}

fn price_line<S: LocaleStore>(context: &TranslationContext<S>, plan: &Plan) -> String {
    context.format(
        "planPriceFrom",
        &[("price", format_price(plan.price_yen).as_str())],
    )
}

pub fn render_testimonials<S: LocaleStore>(context: &TranslationContext<S>) -> String {
    let mut out = String::new();
    let _ = write!(out, "## {}", context.t("testimonialsTitle"));
    for testimonial in &TESTIMONIALS {
        let _ = write!(
            out,
            "\n\n{}\n\"{}\"\n  {} / {}",
            testimonial.stars(),
            context.t(testimonial.quote_key),
            context.t(testimonial.author_key),
            context.t(testimonial.role_key)
        );
    }
    out
}

pub fn render_countdown<S: LocaleStore>(
    context: &TranslationContext<S>,
    state: CountdownState,
) -> String {
    match state {
        CountdownState::Expired => context.t("countdownExpired").to_string(),
        CountdownState::Running(remaining) => format!(
            "{}: {} {} {:02} {} {:02} {} {:02} {}",
            context.t("countdownTitle"),
            remaining.days,
            context.t("countdownDays"),
            remaining.hours,
            context.t("countdownHours"),
            remaining.minutes,
            context.t("countdownMinutes"),
            remaining.seconds,
            context.t("countdownSeconds")
        ),
    }
}

pub fn render_contact<S: LocaleStore>(
    context: &TranslationContext<S>,
    status: &FormStatus,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "## {}", context.t("contactTitle"));
    let _ = writeln!(out, "{}", context.t("contactSubtitle"));

    if *status == FormStatus::Success {
        let _ = write!(out, "{}", context.t("contactSuccess"));
        return out;
    }

    let _ = writeln!(out, "{}: ____", context.t("contactName"));
    let _ = writeln!(out, "{}: ____", context.t("contactEmail"));
    let _ = writeln!(
        out,
        "{} ({}): ____",
        context.t("contactPhone"),
        context.t("contactPhoneOptional")
    );
    let _ = writeln!(out, "{}: ____", context.t("contactMessage"));

    match status {
        FormStatus::Submitting => {
            let _ = write!(out, "[{}]", context.t("contactSubmitting"));
        }
        _ => {
            let _ = write!(out, "[{}]", context.t("contactSubmit"));
        }
    }
    if let Some(notice) = status.notice() {
        let _ = write!(out, "\n! {}", notice.message(context));
    }

    out
}

pub fn render_links<S: LocaleStore>(
    context: &TranslationContext<S>,
    links: &ExternalLinks,
) -> String {
    [
        ("linkSurvey", &links.survey),
        ("linkBooking", &links.booking),
        ("linkPayment", &links.payment),
    ]
    .iter()
    .map(|(key, url)| format!("{}: {}", context.t(key), url))
    .collect::<Vec<_>>()
    .join("\n")
}

pub fn render_footer<S: LocaleStore>(context: &TranslationContext<S>, year: i32) -> String {
    format!(
        "{}\n{}",
        context.t("footerTagline"),
        context.format("footerCopyright", &[("year", year.to_string().as_str())])
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::FormNotice;
    use crate::countdown::Remaining;
    use crate::i18n::Language;
    use crate::showcase::PLANS;
    use crate::storage::MemoryStore;
    use reqwest::Url;

    fn context_for(language: Language) -> TranslationContext<MemoryStore> {
        let mut context = TranslationContext::new(MemoryStore::new());
        context.set_language(language);
        context
    }

    // ==================== Header Tests ====================

    #[test]
    fn test_header_marks_active_language() {
        let context = context_for(Language::Ko);
        let header = render_header(&context, &NavMenu::new(), &LanguageSwitcher::new());
        assert!(header.contains("[한국어]"));
        assert!(header.contains("日本語 / English / [한국어]"));
        assert!(header.contains("요금제 (#plans)"));
    }

    // ==================== Hero Tests ====================

    #[test]
    fn test_hero_expanded_step_shows_body() {
        let context = context_for(Language::En);
        let mut preview = HeroPreview::new();
        preview.toggle_step(2);

        let hero = render_hero(&context, &preview);
        assert!(hero.contains("[Desktop view] | Mobile view"));
        assert!(hero.contains("- 3. Build"));
        assert!(hero.contains("Every page is built mobile-first"));
        assert!(hero.contains("+ 1. Discovery"));
        assert!(!hero.contains("A 30-minute online call"));
    }

    // ==================== Plans Tests ====================

    #[test]
    fn test_plans_in_each_language() {
        let showcase = PlanShowcase::new(DocumentScroll::new());

        let en = render_plans(&context_for(Language::En), &showcase);
        assert!(en.starts_with("## Plans"));
        assert!(en.contains("### Standard (Most popular)"));
        assert!(en.contains("From ¥120,000"));

        let ja = render_plans(&context_for(Language::Ja), &showcase);
        assert!(ja.starts_with("## 料金プラン"));
        assert!(ja.contains("30,000円〜"));

        let ko = render_plans(&context_for(Language::Ko), &showcase);
        assert!(ko.starts_with("## 요금제"));
        assert!(ko.contains("300,000엔부터"));
    }

    #[test]
    fn test_plan_detail_lists_features() {
        let detail = render_plan_detail(&context_for(Language::En), &PLANS[2]);
        assert!(detail.starts_with("=== Premium ==="));
        assert!(detail.contains("  - Unlimited pages"));
        assert!(detail.contains("[Choose this plan] [Close]"));
    }

    // ==================== Countdown Tests ====================

    #[test]
    fn test_countdown_running() {
        let state = CountdownState::Running(Remaining {
            days: 2,
            hours: 3,
            minutes: 4,
            seconds: 5,
        });
        assert_eq!(
            render_countdown(&context_for(Language::En), state),
            "Campaign ends in: 2 days 03 hours 04 minutes 05 seconds"
        );
    }

    #[test]
    fn test_countdown_expired() {
        assert_eq!(
            render_countdown(&context_for(Language::Ja), CountdownState::Expired),
            "キャンペーンは終了しました"
        );
    }

    // ==================== Contact Tests ====================

    #[test]
    fn test_contact_idle_with_notice() {
        let status = FormStatus::Idle {
            notice: Some(FormNotice::Provider("Invalid email".to_string())),
        };
        let contact = render_contact(&context_for(Language::En), &status);
        assert!(contact.contains("[Send message]"));
        assert!(contact.ends_with("! Invalid email"));
    }

    #[test]
    fn test_contact_submitting_and_success() {
        let context = context_for(Language::En);
        assert!(render_contact(&context, &FormStatus::Submitting).contains("[Sending...]"));

        let success = render_contact(&context, &FormStatus::Success);
        assert!(success.ends_with("Thank you! We will reply within two business days."));
        assert!(!success.contains("[Send message]"));
    }

    // ==================== Footer & Links Tests ====================

    #[test]
    fn test_footer_year() {
        let footer = render_footer(&context_for(Language::En), 2025);
        assert!(footer.ends_with("© 2025 Studio Site. All rights reserved."));
    }

    #[test]
    fn test_links() {
        let links = ExternalLinks {
            survey: Url::parse("https://forms.example.com/survey").unwrap(),
            booking: Url::parse("https://booking.example.com/consultation").unwrap(),
            payment: Url::parse("https://pay.example.com/checkout").unwrap(),
        };
        let rendered = render_links(&context_for(Language::En), &links);
        assert_eq!(
            rendered.lines().next(),
            Some("Fill in the pre-consultation survey: https://forms.example.com/survey")
        );
        assert_eq!(rendered.lines().count(), 3);
    }

    #[test]
    fn test_testimonials_in_order() {
        let rendered = render_testimonials(&context_for(Language::En));
        let sato = rendered.find("Ms. Sato").unwrap();
        let kim = rendered.find("Mr. Kim").unwrap();
        assert!(sato < kim);
        assert!(rendered.contains("★★★★☆"));
    }
}
