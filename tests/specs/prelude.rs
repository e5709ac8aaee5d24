//! Test helpers for behavioral specifications.
//!
//! Provides a page wired to fakes plus reply builders.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

pub use lw_adapters::{
    FakeForm, FakePanelSurface, FakeSurface, FakeTransport, PanelCall, SurfaceCall,
    TransportCall, TransportError,
};
pub use lw_core::{
    Direction, FormData, Outcome, OutcomeKind, PanelState, Point, Reply, Size, Template,
    Viewport,
};
pub use lw_engine::{required_field, OutcomeHandler, Page, PageConfig, PageSurfaces, SubmitError};
pub use parking_lot::Mutex;
pub use serde_json::json;
pub use std::sync::Arc;
pub use std::time::Duration;

/// Default success auto-dismiss delay
pub const DISMISS: Duration = Duration::from_millis(5_000);

/// Default liveness period
pub const LIVENESS: Duration = Duration::from_millis(30_000);

/// A page backed by fakes, with handles to everything it renders into.
pub struct PageHarness {
    pub page: Page<FakeTransport, FakeSurface>,
    pub transport: FakeTransport,
    pub flash_success: FakeSurface,
    pub flash_error: FakeSurface,
    pub form_error: FakeSurface,
}

impl PageHarness {
    pub fn new() -> Self {
        Self::with_config(PageConfig::default())
    }

    pub fn with_config(config: PageConfig) -> Self {
        let transport = FakeTransport::new();
        let surfaces = PageSurfaces {
            flash_success: FakeSurface::new(),
            flash_error: FakeSurface::new(),
            form_error: FakeSurface::new(),
        };
        let page = Page::new(config, transport.clone(), surfaces.clone());
        Self {
            page,
            transport,
            flash_success: surfaces.flash_success,
            flash_error: surfaces.flash_error,
            form_error: surfaces.form_error,
        }
    }

    /// Script every POST to `url` with `reply`.
    pub fn reply(&self, url: &str, reply: serde_json::Value) -> &Self {
        self.transport.set_reply(url, Ok(Reply::new(reply)));
        self
    }

    /// Script the next POST to `url` with `reply`.
    pub fn reply_once(&self, url: &str, reply: serde_json::Value) -> &Self {
        self.transport.push_reply(url, Ok(Reply::new(reply)));
        self
    }

    pub fn page_html(&self, url: &str, html: &str) -> &Self {
        self.transport.set_page(url, Ok(html.to_string()));
        self
    }
}

/// Outcomes seen by a recording handler, in arrival order
pub type OutcomeLog = Arc<Mutex<Vec<Outcome>>>;

/// Handler recording every outcome it receives.
pub fn recording_handler() -> (OutcomeHandler, OutcomeLog) {
    let log = OutcomeLog::default();
    let handler: OutcomeHandler = {
        let log = Arc::clone(&log);
        Arc::new(move |outcome: Outcome| log.lock().push(outcome))
    };
    (handler, log)
}

pub fn success(content: serde_json::Value) -> serde_json::Value {
    json!({"status": "success", "content": content})
}

pub fn fail(message: &str) -> serde_json::Value {
    json!({"status": "fail", "message": message})
}

pub fn viewport() -> Viewport {
    Viewport::new(0.0, 0.0, 1000.0, 800.0)
}
