//! Contact form state: the visitor's draft, the submission status banner,
//! and the in-flight guard.
//!
//! DESIGN
//! ======
//! A submission is split into two synchronous transitions around the network
//! call: `begin_submission` (guard + status reset + draft snapshot) and
//! `finish_submission` (apply the outcome). Keeping both sides synchronous
//! means the reactive signal is never borrowed across an await point.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::{Deserialize, Serialize};

use crate::net::contact::SubmitError;

pub const SUBMIT_LABEL: &str = "Отправить заявку";
pub const SUBMITTING_LABEL: &str = "Отправка...";
pub const SUCCESS_BANNER: &str = "✓ Заявка успешно отправлена! Свяжемся с вами в ближайшее время.";
pub const ERROR_BANNER: &str = "✗ Ошибка отправки. Попробуйте позже или свяжитесь по телефону.";

/// The visitor's in-progress form values. Serializes to the intake wire body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl FormDraft {
    /// True when every field is empty (the state after a successful submit).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.phone.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    #[must_use]
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Phone => &self.phone,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Phone => self.phone = value,
            FormField::Email => self.email = value,
            FormField::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Draft field addressed by an input control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Phone,
    Email,
    Message,
}

/// Outcome banner shown under the form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// No banner.
    #[default]
    Idle,
    Success,
    Error,
}

impl SubmissionStatus {
    /// Banner text, or `None` while idle.
    #[must_use]
    pub fn banner(self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Success => Some(SUCCESS_BANNER),
            Self::Error => Some(ERROR_BANNER),
        }
    }

    /// CSS modifier class for the banner.
    #[must_use]
    pub fn banner_class(self) -> &'static str {
        match self {
            Self::Idle => "form-banner",
            Self::Success => "form-banner form-banner--success",
            Self::Error => "form-banner form-banner--error",
        }
    }
}

/// Complete state of one contact form instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub draft: FormDraft,
    pub status: SubmissionStatus,
    /// Set between dispatching the request and receiving its resolution.
    pub in_flight: bool,
}

impl ContactFormState {
    /// Start a submission attempt.
    ///
    /// Returns `None` (and changes nothing) when a submission is already in
    /// flight. Otherwise marks the form in flight, clears the status banner,
    /// and returns a snapshot of the draft to send.
    pub fn begin_submission(&mut self) -> Option<FormDraft> {
        if self.in_flight {
            return None;
        }
        self.in_flight = true;
        self.status = SubmissionStatus::Idle;
        Some(self.draft.clone())
    }

    /// Apply the result of the request started by [`Self::begin_submission`].
    ///
    /// Success clears the draft; failure keeps it so typed input is not lost.
    pub fn finish_submission(&mut self, result: &Result<(), SubmitError>) {
        self.in_flight = false;
        match result {
            Ok(()) => {
                self.status = SubmissionStatus::Success;
                self.draft.clear();
            }
            Err(_) => self.status = SubmissionStatus::Error,
        }
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.in_flight { SUBMITTING_LABEL } else { SUBMIT_LABEL }
    }
}
