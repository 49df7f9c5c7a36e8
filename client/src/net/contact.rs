//! Contact form delivery.
//!
//! Client-side (hydrate): the request goes out through `gloo-net`.
//! Everywhere else the flow is driven through the `ContactTransport` trait so
//! it can run against in-memory transports.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and non-2xx responses are both folded into the form's
//! `Error` status. Nothing is retried and the response body is never read.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::cell::RefCell;

use leptos::prelude::*;

use crate::state::contact::{ContactFormState, FormDraft};

/// Intake endpoint the form posts to.
pub const CONTACT_ENDPOINT: &str = "/api/contact";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("failed to encode contact request: {0}")]
    Encode(String),
    #[error("contact request failed: {0}")]
    Transport(String),
    #[error("contact request rejected with status {0}")]
    Rejected(u16),
}

/// What a call to [`submit`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another submission was already in flight; nothing was sent.
    Suppressed,
    Delivered,
    Failed(SubmitError),
}

/// Sends one JSON POST and reports the HTTP status code.
#[allow(async_fn_in_trait)]
pub trait ContactTransport {
    /// # Errors
    ///
    /// Returns [`SubmitError::Transport`] when the request could not complete.
    async fn post_json(&self, url: &str, body: String) -> Result<u16, SubmitError>;
}

/// Holder of a [`ContactFormState`] that the submit flow can drive.
pub trait ContactFormStore {
    fn begin_submission(&self) -> Option<FormDraft>;
    fn finish_submission(&self, result: &Result<(), SubmitError>);
}

impl ContactFormStore for RwSignal<ContactFormState> {
    fn begin_submission(&self) -> Option<FormDraft> {
        // A disposed signal means the form is gone; treat it like a suppressed submit.
        self.try_update(ContactFormState::begin_submission).flatten()
    }

    fn finish_submission(&self, result: &Result<(), SubmitError>) {
        self.update(|state| state.finish_submission(result));
    }
}

impl ContactFormStore for RefCell<ContactFormState> {
    fn begin_submission(&self) -> Option<FormDraft> {
        self.borrow_mut().begin_submission()
    }

    fn finish_submission(&self, result: &Result<(), SubmitError>) {
        self.borrow_mut().finish_submission(result);
    }
}

#[must_use]
pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Submit the form held by `store` to `endpoint`.
///
/// At most one request is dispatched per call, and none while a previous
/// call is still in flight. The store's status and draft are updated with the
/// outcome before this returns.
pub async fn submit<S, T>(store: &S, transport: &T, endpoint: &str) -> SubmitOutcome
where
    S: ContactFormStore,
    T: ContactTransport,
{
    let Some(draft) = store.begin_submission() else {
        return SubmitOutcome::Suppressed;
    };

    let result = deliver(transport, endpoint, &draft).await;
    store.finish_submission(&result);

    match result {
        Ok(()) => SubmitOutcome::Delivered,
        Err(e) => SubmitOutcome::Failed(e),
    }
}

async fn deliver<T>(transport: &T, endpoint: &str, draft: &FormDraft) -> Result<(), SubmitError>
where
    T: ContactTransport,
{
    let body = serde_json::to_string(draft).map_err(|e| SubmitError::Encode(e.to_string()))?;
    let status = transport.post_json(endpoint, body).await?;
    if is_success_status(status) {
        Ok(())
    } else {
        Err(SubmitError::Rejected(status))
    }
}

/// `fetch`-backed transport used in the browser.
#[cfg(feature = "hydrate")]
pub struct BrowserTransport;

#[cfg(feature = "hydrate")]
impl ContactTransport for BrowserTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<u16, SubmitError> {
        let resp = gloo_net::http::Request::post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| SubmitError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        Ok(resp.status())
    }
}
