//! Contact form: client-side validation, the multipart POST to the form
//! service, and the idle → submitting → success status with timed reset.
//!
//! Failures never leave the form stuck: every error path ends in
//! `FormStatus::Idle` with a notice, and the user may simply submit again.

use crate::config::FormMetadata;
use crate::i18n::TranslationContext;
use crate::storage::LocaleStore;
use reqwest::header::ACCEPT;
use reqwest::multipart::Form;
use reqwest::{StatusCode, Url};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// What the visitor typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

impl ContactSubmission {
    /// Check required fields and the email shape before sending.
    pub fn validate(&self) -> Result<(), FormNotice> {
        if self.name.trim().is_empty() {
            return Err(FormNotice::Required("contactName"));
        }
        if self.email.trim().is_empty() {
            return Err(FormNotice::Required("contactEmail"));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(FormNotice::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(FormNotice::Required("contactMessage"));
        }
        Ok(())
    }

    fn phone(&self) -> Option<&str> {
        self.phone
            .as_deref()
            .map(str::trim)
            .filter(|phone| !phone.is_empty())
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// Message shown under the form after a failed attempt.
///
/// Kept language-independent so it follows language switches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormNotice {
    /// A required field is blank; holds the field's label key
    Required(&'static str),
    InvalidEmail,
    /// Message supplied by the form service, shown verbatim
    Provider(String),
    /// Any failure without a usable provider message
    Generic,
}

impl FormNotice {
    pub fn message<S: LocaleStore>(&self, context: &TranslationContext<S>) -> String {
        match self {
            FormNotice::Required(field_key) => {
                context.format("contactErrorRequired", &[("field", context.t(field_key))])
            }
            FormNotice::InvalidEmail => context.t("contactErrorEmail").to_string(),
            FormNotice::Provider(message) => message.clone(),
            FormNotice::Generic => context.t("contactErrorGeneric").to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Idle { notice: Option<FormNotice> },
    Submitting,
    Success,
}

impl FormStatus {
    pub fn idle() -> Self {
        FormStatus::Idle { notice: None }
    }

    pub fn notice(&self) -> Option<&FormNotice> {
        match self {
            FormStatus::Idle { notice } => notice.as_ref(),
            _ => None,
        }
    }
}

impl Default for FormStatus {
    fn default() -> Self {
        Self::idle()
    }
}

// ==================== Form Service Client ====================

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("failed to reach the form service: {0}")]
    Network(#[from] reqwest::Error),

    #[error("form service rejected the submission ({status})")]
    Rejected {
        status: StatusCode,
        message: Option<String>,
    },
}

impl SubmitError {
    /// The provider's own explanation, when it sent one.
    pub fn provider_message(&self) -> Option<&str> {
        match self {
            SubmitError::Rejected {
                message: Some(message),
                ..
            } => Some(message),
            _ => None,
        }
    }
}

/// Pull a user-facing message out of a failure response body.
///
/// `errors[].message` entries are joined with ", "; otherwise `error` is
/// used. Each field is read on its own, so a `null` or oddly typed sibling
/// does not hide a usable message. Anything else (including non-JSON)
/// yields `None`.
fn extract_error_message(body: &str) -> Option<String> {
    let parsed: Value = serde_json::from_str(body).ok()?;

    let messages: Vec<&str> = parsed
        .get("errors")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.get("message").and_then(Value::as_str))
                .map(str::trim)
                .filter(|message| !message.is_empty())
                .collect()
        })
        .unwrap_or_default();
    if !messages.is_empty() {
        return Some(messages.join(", "));
    }

    parsed
        .get("error")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|error| !error.is_empty())
        .map(str::to_string)
}

/// Sends submissions to the third-party form endpoint.
#[derive(Debug, Clone)]
pub struct ContactClient {
    http: reqwest::Client,
    endpoint: Url,
    metadata: FormMetadata,
}

impl ContactClient {
    pub fn new(endpoint: Url, metadata: FormMetadata) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
            metadata,
        }
    }

    /// POST one submission as multipart form data. Any 2xx is success.
    pub async fn send(&self, submission: &ContactSubmission) -> Result<(), SubmitError> {
        let mut form = Form::new()
            .text("name", submission.name.trim().to_string())
            .text("email", submission.email.trim().to_string());
        if let Some(phone) = submission.phone() {
            form = form.text("phone", phone.to_string());
        }
        let form = form
            .text("message", submission.message.trim().to_string())
            .text("_replyto", self.metadata.reply_to.clone())
            .text("_subject", self.metadata.subject.clone())
            .text("form-name", self.metadata.form_name.clone());

        let response = self
            .http
            .post(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(SubmitError::Rejected {
            status,
            message: extract_error_message(&body),
        })
    }
}

// ==================== Form State ====================

/// The contact form's status, shared with whoever renders it.
pub struct ContactForm {
    client: ContactClient,
    status: Arc<watch::Sender<FormStatus>>,
    reset_delay: Duration,
    reset_task: Mutex<Option<JoinHandle<()>>>,
}

impl ContactForm {
    pub fn new(client: ContactClient, reset_delay: Duration) -> Self {
        let (status, _) = watch::channel(FormStatus::idle());
        Self {
            client,
            status: Arc::new(status),
            reset_delay,
            reset_task: Mutex::new(None),
        }
    }

    pub fn status(&self) -> FormStatus {
        self.status.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<FormStatus> {
        self.status.subscribe()
    }

    /// Validate and send a submission, returning the resulting status.
    ///
    /// Ignored while a previous submission is still in flight. On success
    /// the status returns to idle by itself after the reset delay.
    pub async fn submit(&self, submission: &ContactSubmission) -> FormStatus {
        let validation = submission.validate();

        // Check and transition under one lock so two callers cannot both send
        let accepted = self.status.send_if_modified(|status| {
            if *status == FormStatus::Submitting {
                return false;
            }
            *status = match &validation {
                Ok(()) => FormStatus::Submitting,
                Err(notice) => FormStatus::Idle {
                    notice: Some(notice.clone()),
                },
            };
            true
        });
        if !accepted {
            debug!("Submission already in flight, ignoring");
            return FormStatus::Submitting;
        }

        self.cancel_reset();

        if let Err(notice) = validation {
            debug!("Contact form failed validation: {:?}", notice);
            return self.status();
        }

        let in_flight = InFlight::new(&self.status);
        match self.client.send(submission).await {
            Ok(()) => {
                info!("Contact form submitted");
                in_flight.settle(FormStatus::Success);
                self.schedule_reset();
            }
            Err(e) => {
                warn!("Contact form submission failed: {}", e);
                let notice = match e.provider_message() {
                    Some(message) => FormNotice::Provider(message.to_string()),
                    None => FormNotice::Generic,
                };
                in_flight.settle(FormStatus::Idle {
                    notice: Some(notice),
                });
            }
        }

        self.status()
    }

    /// Clear the notice without submitting (e.g., when the visitor edits a field).
    pub fn dismiss_notice(&self) {
        self.status.send_if_modified(|status| match status {
            FormStatus::Idle { notice } if notice.is_some() => {
                *notice = None;
                true
            }
            _ => false,
        });
    }

    fn schedule_reset(&self) {
        let status = Arc::clone(&self.status);
        let delay = self.reset_delay;
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            status.send_if_modified(|current| {
                if *current == FormStatus::Success {
                    *current = FormStatus::idle();
                    true
                } else {
                    false
                }
            });
        });

        let mut slot = self
            .reset_task
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(previous) = slot.replace(task) {
            previous.abort();
        }
    }

    fn cancel_reset(&self) {
        let mut slot = self
            .reset_task
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(task) = slot.take() {
            task.abort();
        }
    }
}

/// Marks a request in flight. If the submitting future is dropped before
/// the request settles, the form goes back to idle with the generic notice.
struct InFlight<'a> {
    status: &'a watch::Sender<FormStatus>,
    settled: bool,
}

impl<'a> InFlight<'a> {
    fn new(status: &'a watch::Sender<FormStatus>) -> Self {
        Self {
            status,
            settled: false,
        }
    }

    fn settle(mut self, next: FormStatus) {
        self.status.send_replace(next);
        self.settled = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        warn!("Contact form submission abandoned before completion");
        self.status.send_if_modified(|status| {
            if *status == FormStatus::Submitting {
                *status = FormStatus::Idle {
                    notice: Some(FormNotice::Generic),
                };
                true
            } else {
                false
            }
        });
    }
}

impl Drop for ContactForm {
    fn drop(&mut self) {
        self.cancel_reset();
    }
}
