//! Intercepted form submission scenarios.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[tokio::test]
async fn blank_required_field_never_reaches_server_or_handler() {
    let h = PageHarness::new();
    let (handler, log) = recording_handler();
    let form = FakeForm::new("/add-project", FormData::new().with("DisplayName", ""));
    let binding = h
        .page
        .bind_form(form, handler)
        .with_guard(required_field("DisplayName"));

    let result = binding.submit().await;

    assert_eq!(
        result,
        Err(SubmitError::Rejected {
            field: "DisplayName".to_string()
        })
    );
    assert!(h.transport.calls().is_empty());
    assert_eq!(log.lock().len(), 0);
    assert!(!h.form_error.is_visible());
}

#[tokio::test(start_paused = true)]
async fn concurrent_submissions_complete_out_of_order() {
    let h = PageHarness::new();
    h.reply("/slow", success(json!("slow")));
    h.reply("/fast", success(json!("fast")));
    h.transport.set_delay("/slow", Duration::from_millis(300));
    h.transport.set_delay("/fast", Duration::from_millis(100));

    let (handler, log) = recording_handler();
    let slow = h
        .page
        .bind_form(FakeForm::new("/slow", FormData::new()), Arc::clone(&handler));
    let fast = h
        .page
        .bind_form(FakeForm::new("/fast", FormData::new()), handler);

    let (slow_kind, fast_kind) = tokio::join!(slow.submit(), fast.submit());

    assert_eq!(slow_kind, Ok(OutcomeKind::Success));
    assert_eq!(fast_kind, Ok(OutcomeKind::Success));
    // Each reply reaches the handler as it lands, not in submission order
    assert_eq!(
        *log.lock(),
        vec![
            Outcome::Success {
                payload: json!("fast")
            },
            Outcome::Success {
                payload: json!("slow")
            },
        ]
    );
}

#[tokio::test]
async fn every_guard_passing_attempt_yields_one_outcome() {
    let h = PageHarness::new();
    h.reply_once("/add-project", fail("Name taken"));
    h.transport
        .push_reply("/add-project", Err(TransportError::Timeout));
    h.reply_once("/add-project", json!({"message": "no status"}));
    h.reply_once("/add-project", json!({"status": "error", "message": "db"}));
    let (handler, log) = recording_handler();
    let binding = h.page.bind_form(
        FakeForm::new("/add-project", FormData::new().with("DisplayName", "x")),
        handler,
    );

    for _ in 0..4 {
        binding.submit().await.unwrap();
    }

    let kinds: Vec<OutcomeKind> = log.lock().iter().map(Outcome::kind).collect();
    assert_eq!(
        kinds,
        vec![
            OutcomeKind::Fail,
            OutcomeKind::Transport,
            OutcomeKind::Unknown,
            OutcomeKind::Error
        ]
    );
}

#[tokio::test]
async fn checkbox_change_submits_with_extra_fields() {
    // Collaborator checkboxes submit programmatically with the toggled value.
    let h = PageHarness::new();
    h.reply("/collaborators", success(json!(null)));
    let form = FakeForm::new(
        "/collaborators",
        FormData::new()
            .with("ProjectName", "thesis")
            .with("Collaborator", "alice"),
    );
    let (handler, log) = recording_handler();
    let binding = h.page.bind_form(form, handler);

    let kind = binding
        .submit_programmatically(FormData::new().with("Collaborator", "bob"))
        .await;

    assert_eq!(kind, OutcomeKind::Success);
    assert_eq!(log.lock().len(), 1);
    assert_eq!(
        h.transport.sent_to("/collaborators"),
        vec![FormData::new()
            .with("ProjectName", "thesis")
            .with("Collaborator", "bob")]
    );
}
