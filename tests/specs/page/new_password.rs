//! The new-password page: errors render inline in the form, success
//! navigates away, and a resend link posts outside the form.

use crate::prelude::*;
use similar_asserts::assert_eq;
use std::sync::atomic::{AtomicBool, Ordering};

struct PasswordPage {
    h: PageHarness,
    form: FakeForm,
    navigated: Arc<AtomicBool>,
}

impl PasswordPage {
    fn new() -> Self {
        Self {
            h: PageHarness::new(),
            form: FakeForm::new(
                "/newpassword",
                FormData::new()
                    .with("UserId", "42")
                    .with("Password", "hunter22"),
            ),
            navigated: Arc::new(AtomicBool::new(false)),
        }
    }

    fn handler(&self) -> OutcomeHandler {
        let form_errors = self.h.page.form_errors().clone();
        let navigated = Arc::clone(&self.navigated);
        Arc::new(move |outcome: Outcome| {
            form_errors.dispatch(&outcome, &Template::default());
            if outcome.is_success() {
                navigated.store(true, Ordering::SeqCst);
            }
        })
    }

    async fn resend(&self) -> OutcomeKind {
        let outcome = self
            .h
            .page
            .post("/newpassword-send", &FormData::new().with("UserId", "42"))
            .await;
        if !outcome.is_success() {
            self.h
                .page
                .form_errors()
                .dispatch(&outcome, &Template::default());
        }
        outcome.kind()
    }
}

#[tokio::test]
async fn weak_password_then_success() {
    let p = PasswordPage::new();
    p.h.reply_once("/newpassword", fail("Password is too short"));
    p.h.reply_once("/newpassword", json!({"status": "success"}));
    let binding = p.h.page.bind_form(p.form.clone(), p.handler());

    binding.submit().await.unwrap();
    assert_eq!(p.h.form_error.html(), "<p>Password is too short</p>");
    assert!(!p.navigated.load(Ordering::SeqCst));

    p.form.set_field("Password", "correct horse battery staple");
    binding.submit().await.unwrap();

    assert!(!p.h.form_error.is_visible());
    assert!(p.navigated.load(Ordering::SeqCst));
    assert!(!p.h.flash_success.is_visible());
    assert_eq!(
        p.h.transport.sent_to("/newpassword")[1],
        FormData::new()
            .with("UserId", "42")
            .with("Password", "correct horse battery staple")
    );
}

#[tokio::test]
async fn resend_with_expired_session_prompts_reload() {
    let p = PasswordPage::new();
    p.h.reply(
        "/newpassword-send",
        json!({"status": "noauth", "message": "token expired"}),
    );

    assert_eq!(p.resend().await, OutcomeKind::NoAuth);

    let shown = p.h.form_error.html();
    assert!(shown.contains("try refreshing the page"));
    assert!(shown.ends_with("<p>Could not authenticate because: token expired</p>"));
}

#[tokio::test]
async fn resend_success_leaves_form_errors_alone() {
    let p = PasswordPage::new();
    p.h.reply("/newpassword-send", json!({"status": "success"}));
    p.h.page.form_errors().set_error("Password is too short");

    assert_eq!(p.resend().await, OutcomeKind::Success);
    assert_eq!(p.h.form_error.html(), "<p>Password is too short</p>");
}

#[tokio::test]
async fn server_error_shows_generic_preface() {
    let p = PasswordPage::new();
    p.h.reply("/newpassword", json!({"status": "error", "message": "smtp down"}));
    let binding = p.h.page.bind_form(p.form.clone(), p.handler());

    assert_eq!(binding.submit().await, Ok(OutcomeKind::Error));
    assert_eq!(
        p.h.form_error.html(),
        "<p>An unexpected error has occurred.</p><p>smtp down</p>"
    );
}
