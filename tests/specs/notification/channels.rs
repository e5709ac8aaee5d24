//! Notification channel scenarios: policies, timers and rendering.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[tokio::test(start_paused = true)]
async fn second_success_does_not_replace_visible_one() {
    let h = PageHarness::new();
    let template = Template::new("Project <strong>{0}</strong> added.");

    h.page.flash().dispatch(
        &Outcome::Success {
            payload: json!("Thesis"),
        },
        &template,
    );
    h.page.flash().dispatch(
        &Outcome::Success {
            payload: json!("Other"),
        },
        &template,
    );

    assert_eq!(
        h.flash_success.html(),
        "Project <strong>Thesis</strong> added."
    );
}

#[tokio::test]
async fn later_error_replaces_earlier_one() {
    let h = PageHarness::new();
    h.page.form_errors().dispatch(
        &Outcome::Fail {
            message: "x".into(),
        },
        &Template::default(),
    );
    h.page.form_errors().dispatch(
        &Outcome::Fail {
            message: "y".into(),
        },
        &Template::default(),
    );

    assert_eq!(h.form_error.html(), "<p>y</p>");
    assert_eq!(h.page.form_errors().snapshot().message, "<p>y</p>");
}

#[tokio::test(start_paused = true)]
async fn hide_then_reuse_is_not_cut_short_by_old_timer() {
    let h = PageHarness::new();
    let flash = h.page.flash();

    flash.success("<p>first</p>");
    tokio::time::sleep(DISMISS - Duration::from_millis(500)).await;
    flash.success_channel().hide();
    flash.success("<p>second</p>");

    // First timer's deadline passes
    tokio::time::sleep(Duration::from_millis(1_000)).await;
    assert!(h.flash_success.is_visible());
    assert_eq!(h.flash_success.html(), "<p>second</p>");

    tokio::time::sleep(DISMISS).await;
    assert!(!h.flash_success.is_visible());
}

#[tokio::test]
async fn content_is_escaped_but_server_messages_are_not() {
    let h = PageHarness::new();
    h.page.flash().dispatch(
        &Outcome::Success {
            payload: json!("<script>"),
        },
        &Template::new("Added {0}"),
    );
    h.page.flash().dispatch(
        &Outcome::Fail {
            message: "<em>already</em> exists".into(),
        },
        &Template::default(),
    );

    assert_eq!(h.flash_success.html(), "Added &lt;script&gt;");
    assert_eq!(h.flash_error.html(), "<p><em>already</em> exists</p>");
}

#[tokio::test]
async fn unknown_and_transport_outcomes_render_generic_text() {
    let h = PageHarness::new();
    let errors = h.page.flash().error_channel();

    errors.dispatch(&Outcome::Unknown, &Template::default());
    assert_eq!(h.flash_error.html(), "<p>An unknown error occurred.</p>");

    errors.dispatch(
        &Outcome::Transport {
            detail: "connection <reset>".into(),
        },
        &Template::default(),
    );
    assert_eq!(
        h.flash_error.html(),
        "<p>Unknown error (bug): connection &lt;reset&gt;</p>"
    );
    assert_eq!(
        h.flash_error.calls(),
        vec![
            SurfaceCall::SetHtml("<p>An unknown error occurred.</p>".into()),
            SurfaceCall::Reveal,
            SurfaceCall::SetHtml("<p>Unknown error (bug): connection &lt;reset&gt;</p>".into()),
        ]
    );
}
