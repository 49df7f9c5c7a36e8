use std::cell::{Cell, RefCell};

use futures::channel::oneshot;
use futures::executor::block_on;

use super::*;
use crate::state::contact::SubmissionStatus;

const URL: &str = "https://intake.test/contact";

fn ivan_draft() -> FormDraft {
    FormDraft {
        name: "Ivan".to_owned(),
        phone: "+7900...".to_owned(),
        email: "a@b.com".to_owned(),
        message: "Need oak flooring".to_owned(),
    }
}

fn form_with_draft() -> RefCell<ContactFormState> {
    RefCell::new(ContactFormState { draft: ivan_draft(), ..ContactFormState::default() })
}

/// Records every request and answers with a fixed result.
struct MockTransport {
    reply: Result<u16, SubmitError>,
    requests: RefCell<Vec<(String, String)>>,
}

impl MockTransport {
    fn status(status: u16) -> Self {
        Self { reply: Ok(status), requests: RefCell::new(Vec::new()) }
    }

    fn failing(reason: &str) -> Self {
        Self { reply: Err(SubmitError::Transport(reason.to_owned())), requests: RefCell::new(Vec::new()) }
    }

    fn calls(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl ContactTransport for MockTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<u16, SubmitError> {
        self.requests.borrow_mut().push((url.to_owned(), body));
        self.reply.clone()
    }
}

/// Holds the request open until the test releases it through a oneshot.
struct GatedTransport {
    calls: Cell<usize>,
    gate: RefCell<Option<oneshot::Receiver<u16>>>,
}

impl ContactTransport for GatedTransport {
    async fn post_json(&self, _url: &str, _body: String) -> Result<u16, SubmitError> {
        self.calls.set(self.calls.get() + 1);
        let gate = self.gate.borrow_mut().take();
        match gate {
            Some(rx) => rx.await.map_err(|e| SubmitError::Transport(e.to_string())),
            None => Err(SubmitError::Transport("gate already used".to_owned())),
        }
    }
}

// =============================================================
// Success / failure outcomes
// =============================================================

#[test]
fn success_clears_draft_and_sets_success() {
    let form = form_with_draft();
    let transport = MockTransport::status(200);

    let outcome = block_on(submit(&form, &transport, URL));

    assert_eq!(outcome, SubmitOutcome::Delivered);
    let state = form.borrow();
    assert_eq!(state.status, SubmissionStatus::Success);
    assert_eq!(state.draft, FormDraft::default());
    assert!(!state.in_flight);
}

#[test]
fn any_2xx_counts_as_success() {
    let form = form_with_draft();
    let transport = MockTransport::status(204);
    assert_eq!(block_on(submit(&form, &transport, URL)), SubmitOutcome::Delivered);
    assert_eq!(form.borrow().status, SubmissionStatus::Success);
}

#[test]
fn service_unavailable_sets_error_and_keeps_draft() {
    let form = form_with_draft();
    let transport = MockTransport::status(503);

    let outcome = block_on(submit(&form, &transport, URL));

    assert_eq!(outcome, SubmitOutcome::Failed(SubmitError::Rejected(503)));
    let state = form.borrow();
    assert_eq!(state.status, SubmissionStatus::Error);
    assert_eq!(state.draft, ivan_draft());
    assert!(!state.in_flight);
}

#[test]
fn client_error_status_is_rejection() {
    let form = form_with_draft();
    let transport = MockTransport::status(422);
    assert_eq!(
        block_on(submit(&form, &transport, URL)),
        SubmitOutcome::Failed(SubmitError::Rejected(422))
    );
    assert_eq!(form.borrow().draft, ivan_draft());
}

#[test]
fn transport_failure_matches_rejection_outcome() {
    let rejected = form_with_draft();
    block_on(submit(&rejected, &MockTransport::status(500), URL));

    let failed = form_with_draft();
    let outcome = block_on(submit(&failed, &MockTransport::failing("network down"), URL));

    assert_eq!(outcome, SubmitOutcome::Failed(SubmitError::Transport("network down".to_owned())));
    assert_eq!(*failed.borrow(), *rejected.borrow());
    assert_eq!(failed.borrow().status, SubmissionStatus::Error);
}

// =============================================================
// Wire contract
// =============================================================

#[test]
fn posts_once_to_endpoint_with_draft_json() {
    let form = form_with_draft();
    let transport = MockTransport::status(200);

    block_on(submit(&form, &transport, URL));

    let requests = transport.requests.borrow();
    assert_eq!(requests.len(), 1);
    let (url, body) = &requests[0];
    assert_eq!(url, URL);

    let json: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "Ivan",
            "phone": "+7900...",
            "email": "a@b.com",
            "message": "Need oak flooring",
        })
    );
}

#[test]
fn retry_after_failure_dispatches_again() {
    let form = form_with_draft();
    let transport = MockTransport::status(500);

    block_on(submit(&form, &transport, URL));
    block_on(submit(&form, &transport, URL));

    assert_eq!(transport.calls(), 2);
    assert_eq!(form.borrow().status, SubmissionStatus::Error);
}

#[test]
fn success_status_range() {
    assert!(is_success_status(200));
    assert!(is_success_status(299));
    assert!(!is_success_status(199));
    assert!(!is_success_status(300));
    assert!(!is_success_status(503));
}

// =============================================================
// In-flight guard
// =============================================================

#[test]
fn second_submit_while_in_flight_is_suppressed() {
    let (tx, rx) = oneshot::channel();
    let form = RefCell::new(ContactFormState {
        draft: ivan_draft(),
        status: SubmissionStatus::Error,
        in_flight: false,
    });
    let transport = GatedTransport { calls: Cell::new(0), gate: RefCell::new(Some(rx)) };

    let (first, second) = block_on(async {
        let first = submit(&form, &transport, URL);
        let second = async {
            // `join!` polls `first` before this block, so the request is pending here.
            {
                let state = form.borrow();
                assert!(state.in_flight);
                assert_eq!(state.status, SubmissionStatus::Idle);
            }
            let outcome = submit(&form, &transport, URL).await;
            tx.send(200).unwrap();
            outcome
        };
        futures::join!(first, second)
    });

    assert_eq!(first, SubmitOutcome::Delivered);
    assert_eq!(second, SubmitOutcome::Suppressed);
    assert_eq!(transport.calls.get(), 1);

    let state = form.borrow();
    assert!(!state.in_flight);
    assert_eq!(state.status, SubmissionStatus::Success);
    assert!(state.draft.is_empty());
}

#[test]
fn dropped_request_resolves_as_error() {
    let (tx, rx) = oneshot::channel::<u16>();
    drop(tx);
    let form = form_with_draft();
    let transport = GatedTransport { calls: Cell::new(0), gate: RefCell::new(Some(rx)) };

    let outcome = block_on(submit(&form, &transport, URL));

    assert!(matches!(outcome, SubmitOutcome::Failed(SubmitError::Transport(_))));
    assert_eq!(form.borrow().status, SubmissionStatus::Error);
    assert!(!form.borrow().in_flight);
}
