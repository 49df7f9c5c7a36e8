//! Contact request intake: payload validation, email rendering, delivery.
//!
//! DESIGN
//! ======
//! Delivery goes through the `ContactMailer` trait so the route can be
//! exercised without a mail provider. The production mailer sends through
//! Resend to the configured inbox.

use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;
use serde::Deserialize;

use crate::config::MailConfig;

const CONTACT_EMAIL_TEMPLATE: &str = include_str!("../../templates/contact_request.html");

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContactRequestError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("invalid email")]
    InvalidEmail,
}

#[derive(Debug, thiserror::Error)]
pub enum ContactMailError {
    #[error("email delivery failed: {0}")]
    Delivery(String),
}

// =============================================================================
// REQUEST
// =============================================================================

/// Raw intake body. Missing keys deserialize as empty strings and are
/// rejected by validation rather than by the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactPayload {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

/// A validated contact request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl TryFrom<ContactPayload> for ContactRequest {
    type Error = ContactRequestError;

    fn try_from(payload: ContactPayload) -> Result<Self, Self::Error> {
        let name = required("name", &payload.name)?;
        let phone = required("phone", &payload.phone)?;
        let email = required("email", &payload.email)?;
        let email = normalize_email(&email).ok_or(ContactRequestError::InvalidEmail)?;
        let message = required("message", &payload.message)?;
        Ok(Self { name, phone, email, message })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, ContactRequestError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ContactRequestError::MissingField(field));
    }
    Ok(trimmed.to_owned())
}

#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    if normalized.is_empty() || normalized.chars().any(char::is_whitespace) {
        return None;
    }
    let parts = normalized.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return None;
    }
    Some(normalized)
}

// =============================================================================
// EMAIL
// =============================================================================

/// Rendered notification for the site owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEmail {
    pub subject: String,
    pub html: String,
}

#[must_use]
pub fn render_contact_email(request: &ContactRequest) -> ContactEmail {
    let subject = format!("Новая заявка с сайта от {}", request.name.replace(['\r', '\n'], " "));
    let html = fill_template(
        CONTACT_EMAIL_TEMPLATE,
        &[
            ("NAME", escape_html(&request.name)),
            ("PHONE", escape_html(&request.phone)),
            ("EMAIL", escape_html(&request.email)),
            ("MESSAGE", escape_html(&request.message)),
        ],
    );
    ContactEmail { subject, html }
}

/// Substitute `{{KEY}}` placeholders in one pass, so values are never rescanned.
/// Unknown placeholders are kept verbatim.
fn fill_template(template: &str, values: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let key = &after[..end];
        match values.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + end + 4]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// =============================================================================
// MAILER
// =============================================================================

/// Delivers contact notifications to the site owner. Enables mocking in tests.
#[async_trait::async_trait]
pub trait ContactMailer: Send + Sync {
    /// # Errors
    ///
    /// Returns [`ContactMailError::Delivery`] if the provider rejects the message.
    async fn deliver(&self, email: &ContactEmail) -> Result<(), ContactMailError>;
}

/// Resend-backed mailer sending every request to one inbox.
pub struct ResendMailer {
    client: Resend,
    from: String,
    to: String,
}

impl ResendMailer {
    #[must_use]
    pub fn new(config: &MailConfig) -> Self {
        Self { client: Resend::new(&config.api_key), from: config.from.clone(), to: config.to.clone() }
    }
}

#[async_trait::async_trait]
impl ContactMailer for ResendMailer {
    async fn deliver(&self, email: &ContactEmail) -> Result<(), ContactMailError> {
        let to = [self.to.as_str()];
        let options = CreateEmailBaseOptions::new(&self.from, to, &email.subject).with_html(&email.html);
        self.client
            .emails
            .send(options)
            .await
            .map_err(|e| ContactMailError::Delivery(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
