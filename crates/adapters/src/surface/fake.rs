// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake surfaces for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{FormElement, PanelSurface, Surface};
use async_trait::async_trait;
use lw_core::{Direction, FormData, Size};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

/// Recorded surface call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    SetHtml(String),
    Reveal,
    Conceal,
}

#[derive(Default)]
struct FakeSurfaceState {
    html: String,
    visible: bool,
    calls: Vec<SurfaceCall>,
}

/// Fake notification surface for testing
#[derive(Clone, Default)]
pub struct FakeSurface {
    inner: Arc<Mutex<FakeSurfaceState>>,
}

impl FakeSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current markup
    pub fn html(&self) -> String {
        self.inner.lock().html.clone()
    }

    /// Whether the last transition was a reveal
    pub fn is_visible(&self) -> bool {
        self.inner.lock().visible
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.inner.lock().calls.clone()
    }
}

impl Surface for FakeSurface {
    fn set_html(&self, html: &str) {
        let mut state = self.inner.lock();
        state.html = html.to_string();
        state.calls.push(SurfaceCall::SetHtml(html.to_string()));
    }

    fn reveal(&self) {
        let mut state = self.inner.lock();
        state.visible = true;
        state.calls.push(SurfaceCall::Reveal);
    }

    fn conceal(&self) {
        let mut state = self.inner.lock();
        state.visible = false;
        state.calls.push(SurfaceCall::Conceal);
    }
}

/// Recorded panel call. Animations record both their start and their end.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelCall {
    Measure,
    MoveTo { top: f64, left: f64 },
    SlideIn(Direction),
    SlideInDone(Direction),
    SlideOut(Direction),
    SlideOutDone(Direction),
}

struct FakePanelState {
    size: Size,
    duration: Duration,
    position: Option<(f64, f64)>,
    visible: bool,
    calls: Vec<PanelCall>,
}

/// Fake panel for testing. Animations sleep for a configurable duration
/// (200ms by default) so tests can interleave requests with paused time.
#[derive(Clone)]
pub struct FakePanelSurface {
    inner: Arc<Mutex<FakePanelState>>,
}

impl Default for FakePanelSurface {
    fn default() -> Self {
        Self::new(Size::default())
    }
}

impl FakePanelSurface {
    pub fn new(size: Size) -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakePanelState {
                size,
                duration: Duration::from_millis(200),
                position: None,
                visible: false,
                calls: Vec::new(),
            })),
        }
    }

    pub fn set_duration(&self, duration: Duration) {
        self.inner.lock().duration = duration;
    }

    /// Change the natural size, e.g. after content was repopulated.
    pub fn set_size(&self, size: Size) {
        self.inner.lock().size = size;
    }

    /// Last `(top, left)` passed to `move_to`
    pub fn position(&self) -> Option<(f64, f64)> {
        self.inner.lock().position
    }

    /// Whether the last finished animation was a slide-in
    pub fn is_visible(&self) -> bool {
        self.inner.lock().visible
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<PanelCall> {
        self.inner.lock().calls.clone()
    }

    fn record(&self, call: PanelCall) -> Duration {
        let mut state = self.inner.lock();
        state.calls.push(call);
        state.duration
    }
}

#[async_trait]
impl PanelSurface for FakePanelSurface {
    fn measure(&self) -> Size {
        let mut state = self.inner.lock();
        state.calls.push(PanelCall::Measure);
        state.size
    }

    fn move_to(&self, top: f64, left: f64) {
        let mut state = self.inner.lock();
        state.position = Some((top, left));
        state.calls.push(PanelCall::MoveTo { top, left });
    }

    async fn slide_in(&self, direction: Direction) {
        let duration = self.record(PanelCall::SlideIn(direction));
        tokio::time::sleep(duration).await;
        let mut state = self.inner.lock();
        state.visible = true;
        state.calls.push(PanelCall::SlideInDone(direction));
    }

    async fn slide_out(&self, direction: Direction) {
        let duration = self.record(PanelCall::SlideOut(direction));
        tokio::time::sleep(duration).await;
        let mut state = self.inner.lock();
        state.visible = false;
        state.calls.push(PanelCall::SlideOutDone(direction));
    }
}

/// Fake form element for testing; fields can be edited between submissions
#[derive(Clone)]
pub struct FakeForm {
    action: String,
    fields: Arc<Mutex<FormData>>,
}

impl FakeForm {
    pub fn new(action: impl Into<String>, fields: FormData) -> Self {
        Self {
            action: action.into(),
            fields: Arc::new(Mutex::new(fields)),
        }
    }

    /// Simulate the user typing into a field
    pub fn set_field(&self, key: &str, value: &str) {
        self.fields.lock().set(key, value);
    }
}

impl FormElement for FakeForm {
    fn action(&self) -> String {
        self.action.clone()
    }

    fn fields(&self) -> FormData {
        self.fields.lock().clone()
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
