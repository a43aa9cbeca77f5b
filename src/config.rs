use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use reqwest::Url;
use std::path::PathBuf;
use std::time::Duration;

/// Hidden metadata sent with every contact form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMetadata {
    pub reply_to: String,
    pub subject: String,
    pub form_name: String,
}

/// Third-party pages the site links to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalLinks {
    pub survey: Url,
    pub booking: Url,
    pub payment: Url,
}

#[derive(Debug, Clone)]
pub struct Config {
    // Contact form
    pub form_endpoint: Url,
    pub form_metadata: FormMetadata,
    pub form_reset_delay: Duration,

    // Persisted preferences
    pub storage_path: PathBuf,

    // Campaign countdown
    pub countdown_target: DateTime<Utc>,

    // Outbound links
    pub links: ExternalLinks,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Contact form
            form_endpoint: parse_url(
                "SITE_FORM_ENDPOINT",
                &std::env::var("SITE_FORM_ENDPOINT").context("SITE_FORM_ENDPOINT not set")?,
            )?,
            form_metadata: FormMetadata {
                reply_to: std::env::var("SITE_CONTACT_REPLY_TO")
                    .unwrap_or_else(|_| "hello@example.com".to_string()),
                subject: std::env::var("SITE_CONTACT_SUBJECT")
                    .unwrap_or_else(|_| "New inquiry from website".to_string()),
                form_name: std::env::var("SITE_FORM_NAME")
                    .unwrap_or_else(|_| "contact".to_string()),
            },
            form_reset_delay: Duration::from_secs(
                std::env::var("SITE_FORM_RESET_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(5),
            ),

            // Persisted preferences
            storage_path: std::env::var("SITE_STORAGE_PATH")
                .unwrap_or_else(|_| "data/storage.json".to_string())
                .into(),

            // Campaign countdown
            countdown_target: match std::env::var("SITE_COUNTDOWN_TARGET") {
                Ok(value) => DateTime::parse_from_rfc3339(&value)
                    .with_context(|| format!("SITE_COUNTDOWN_TARGET is not RFC 3339: {}", value))?
                    .with_timezone(&Utc),
                Err(_) => DateTime::parse_from_rfc3339(DEFAULT_COUNTDOWN_TARGET)?
                    .with_timezone(&Utc),
            },

            // Outbound links
            links: ExternalLinks {
                survey: env_url("SITE_SURVEY_URL", "https://forms.example.com/survey")?,
                booking: env_url("SITE_BOOKING_URL", "https://booking.example.com/consultation")?,
                payment: env_url("SITE_PAYMENT_URL", "https://pay.example.com/checkout")?,
            },
        })
    }
}

const DEFAULT_COUNTDOWN_TARGET: &str = "2025-01-31T23:59:59+09:00";

fn env_url(name: &str, default: &str) -> Result<Url> {
    let value = std::env::var(name).unwrap_or_else(|_| default.to_string());
    parse_url(name, &value)
}

fn parse_url(name: &str, value: &str) -> Result<Url> {
    Url::parse(value).with_context(|| format!("{} is not a valid URL: {}", name, value))
}
