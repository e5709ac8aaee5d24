//! The "my projects" page: an add-project panel opened next to the pointer,
//! submitted asynchronously, then the project list is reloaded.

use crate::prelude::*;
use similar_asserts::assert_eq;

const ADDED: &str = "Project <strong>{0}</strong> added.";

struct ProjectsPage {
    h: PageHarness,
    panel_surface: FakePanelSurface,
    form: FakeForm,
}

impl ProjectsPage {
    fn new() -> Self {
        Self {
            h: PageHarness::new(),
            panel_surface: FakePanelSurface::new(Size::new(300.0, 120.0)),
            form: FakeForm::new("/add-project", FormData::new().with("DisplayName", "")),
        }
    }

    /// Flash errors on failure; on success clear them and flash the name.
    fn handler(&self) -> OutcomeHandler {
        let flash = self.h.page.flash().clone();
        let template = Template::new(ADDED);
        Arc::new(move |outcome: Outcome| {
            if outcome.is_success() {
                flash.hide_error();
            }
            flash.dispatch(&outcome, &template);
        })
    }
}

#[tokio::test(start_paused = true)]
async fn add_project_end_to_end() {
    let p = ProjectsPage::new();
    p.h.reply("/add-project", success(json!("Thesis")));
    p.h.page_html("/bit/myprojects", "<ul><li>Thesis</li></ul>");
    let panel = p.h.page.panel("add-project", p.panel_surface.clone());
    let binding = p
        .h
        .page
        .bind_form(p.form.clone(), p.handler())
        .with_guard(required_field("DisplayName"));

    // Click near the bottom edge: the panel opens upward.
    panel.show(Point::new(50.0, 750.0), viewport()).await;
    assert_eq!(panel.state(), PanelState::Visible);
    assert_eq!(panel.direction(), Direction::Up);
    assert_eq!(p.panel_surface.position(), Some((630.0, 50.0)));

    // Submitting empty does nothing.
    assert!(binding.submit().await.is_err());
    assert!(p.h.transport.calls().is_empty());

    p.form.set_field("DisplayName", "Thesis");
    let kind = binding.submit().await.unwrap();
    assert_eq!(kind, OutcomeKind::Success);
    assert_eq!(
        p.h.flash_success.html(),
        "Project <strong>Thesis</strong> added."
    );

    let list = p.h.page.fetch_fragment("/bit/myprojects").await;
    assert_eq!(list.as_deref(), Some("<ul><li>Thesis</li></ul>"));
    panel.hide().await;

    assert_eq!(panel.state(), PanelState::Hidden);
    let calls = p.panel_surface.calls();
    assert_eq!(
        calls[calls.len() - 2..].to_vec(),
        vec![
            PanelCall::SlideOut(Direction::Up),
            PanelCall::SlideOutDone(Direction::Up)
        ]
    );

    // Flash success goes away on its own
    tokio::time::sleep(DISMISS).await;
    assert!(!p.h.flash_success.is_visible());
}

#[tokio::test]
async fn rejected_project_keeps_panel_and_reports_on_flash() {
    let p = ProjectsPage::new();
    p.h.reply("/add-project", fail("A project named <em>Thesis</em> exists"));
    let binding = p.h.page.bind_form(p.form.clone(), p.handler());
    p.form.set_field("DisplayName", "Thesis");

    assert_eq!(binding.submit().await, Ok(OutcomeKind::Fail));

    assert_eq!(
        p.h.flash_error.html(),
        "<p>A project named <em>Thesis</em> exists</p>"
    );
    assert!(!p.h.flash_success.is_visible());
}

#[tokio::test]
async fn success_clears_earlier_flash_error() {
    let p = ProjectsPage::new();
    p.h.reply_once("/add-project", fail("taken"));
    p.h.reply_once("/add-project", success(json!("Thesis 2")));
    let binding = p.h.page.bind_form(p.form.clone(), p.handler());
    p.form.set_field("DisplayName", "Thesis");

    binding.submit().await.unwrap();
    assert!(p.h.flash_error.is_visible());

    binding.submit().await.unwrap();
    assert!(!p.h.flash_error.is_visible());
    assert_eq!(
        p.h.flash_success.html(),
        "Project <strong>Thesis 2</strong> added."
    );
}

#[tokio::test]
async fn list_reload_failure_surfaces_on_flash_error() {
    let p = ProjectsPage::new();
    p.h.transport.set_page(
        "/bit/myprojects",
        Err(TransportError::Status { status: 503 }),
    );

    assert_eq!(p.h.page.fetch_fragment("/bit/myprojects").await, None);
    assert_eq!(
        p.h.flash_error.html(),
        "<p>Could not load HTML from server:</p>\n<p>HTTP 503</p>"
    );
}

#[tokio::test(start_paused = true)]
async fn cancel_clicked_while_opening_closes_after_reveal() {
    let p = ProjectsPage::new();
    let panel = p.h.page.panel("add-project", p.panel_surface.clone());

    let opening = tokio::spawn({
        let panel = panel.clone();
        async move { panel.show(Point::new(50.0, 50.0), viewport()).await }
    });
    tokio::time::sleep(Duration::from_millis(20)).await;
    panel.hide().await;
    opening.await.unwrap();

    assert_eq!(panel.state(), PanelState::Hidden);
    assert_eq!(
        p.panel_surface.calls()[2..].to_vec(),
        vec![
            PanelCall::SlideIn(Direction::Down),
            PanelCall::SlideInDone(Direction::Down),
            PanelCall::SlideOut(Direction::Down),
            PanelCall::SlideOutDone(Direction::Down),
        ]
    );
}
