use super::*;

fn filled_draft() -> FormDraft {
    FormDraft {
        name: "Ivan".to_owned(),
        phone: "+7900".to_owned(),
        email: "a@b.com".to_owned(),
        message: "Need oak flooring".to_owned(),
    }
}

fn filled_state() -> ContactFormState {
    ContactFormState { draft: filled_draft(), ..ContactFormState::default() }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_idle_and_empty() {
    let state = ContactFormState::default();
    assert_eq!(state.status, SubmissionStatus::Idle);
    assert!(!state.in_flight);
    assert!(state.draft.is_empty());
}

#[test]
fn idle_status_has_no_banner() {
    assert_eq!(SubmissionStatus::Idle.banner(), None);
    assert_eq!(SubmissionStatus::Success.banner(), Some(SUCCESS_BANNER));
    assert_eq!(SubmissionStatus::Error.banner(), Some(ERROR_BANNER));
}

#[test]
fn banner_class_has_status_modifier() {
    assert!(SubmissionStatus::Success.banner_class().ends_with("--success"));
    assert!(SubmissionStatus::Error.banner_class().ends_with("--error"));
}

// =============================================================
// Draft editing
// =============================================================

#[test]
fn set_field_updates_only_that_field() {
    let mut draft = FormDraft::default();
    draft.set_field(FormField::Phone, "+7 900".to_owned());
    assert_eq!(draft.field(FormField::Phone), "+7 900");
    assert_eq!(draft.field(FormField::Name), "");
    assert_eq!(draft.field(FormField::Email), "");
    assert_eq!(draft.field(FormField::Message), "");
}

#[test]
fn draft_serializes_to_four_keys() {
    let json = serde_json::to_value(filled_draft()).unwrap();
    let obj = json.as_object().unwrap();
    assert_eq!(obj.len(), 4);
    assert_eq!(obj["name"], "Ivan");
    assert_eq!(obj["phone"], "+7900");
    assert_eq!(obj["email"], "a@b.com");
    assert_eq!(obj["message"], "Need oak flooring");
}

// =============================================================
// Submission transitions
// =============================================================

#[test]
fn begin_submission_marks_in_flight_and_snapshots_draft() {
    let mut state = filled_state();
    let snapshot = state.begin_submission();
    assert_eq!(snapshot, Some(filled_draft()));
    assert!(state.in_flight);
    assert_eq!(state.submit_label(), SUBMITTING_LABEL);
}

#[test]
fn begin_submission_is_suppressed_while_in_flight() {
    let mut state = filled_state();
    assert!(state.begin_submission().is_some());
    assert_eq!(state.begin_submission(), None);
    assert!(state.in_flight);
}

#[test]
fn begin_submission_clears_previous_banner() {
    let mut state = filled_state();
    state.status = SubmissionStatus::Error;
    state.begin_submission();
    assert_eq!(state.status, SubmissionStatus::Idle);

    let mut state = filled_state();
    state.status = SubmissionStatus::Success;
    state.begin_submission();
    assert_eq!(state.status, SubmissionStatus::Idle);
}

#[test]
fn finish_success_clears_draft() {
    let mut state = filled_state();
    state.begin_submission();
    state.finish_submission(&Ok(()));
    assert_eq!(state.status, SubmissionStatus::Success);
    assert_eq!(state.draft, FormDraft::default());
    assert!(!state.in_flight);
    assert_eq!(state.submit_label(), SUBMIT_LABEL);
}

#[test]
fn finish_rejection_keeps_draft() {
    let mut state = filled_state();
    state.begin_submission();
    state.finish_submission(&Err(SubmitError::Rejected(503)));
    assert_eq!(state.status, SubmissionStatus::Error);
    assert_eq!(state.draft, filled_draft());
    assert!(!state.in_flight);
}

#[test]
fn finish_transport_failure_matches_rejection() {
    let mut rejected = filled_state();
    rejected.begin_submission();
    rejected.finish_submission(&Err(SubmitError::Rejected(500)));

    let mut failed = filled_state();
    failed.begin_submission();
    failed.finish_submission(&Err(SubmitError::Transport("offline".to_owned())));

    assert_eq!(rejected, failed);
}

#[test]
fn edits_during_flight_survive_failure() {
    let mut state = filled_state();
    state.begin_submission();
    state.draft.set_field(FormField::Message, "Need oak flooring, 40 m2".to_owned());
    state.finish_submission(&Err(SubmitError::Rejected(500)));
    assert_eq!(state.draft.message, "Need oak flooring, 40 m2");
}
