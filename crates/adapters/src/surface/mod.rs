// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Page surface adapters.
//!
//! A [`Surface`] is the element a notification channel renders into. A
//! [`PanelSurface`] is a transient, positioned element such as the
//! add-project form. Transitions are opaque: the adapter decides how a reveal
//! or conceal looks, the engine only decides when.

mod noop;

pub use noop::{NoOpPanelSurface, NoOpSurface};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeForm, FakePanelSurface, FakeSurface, PanelCall, SurfaceCall};

use async_trait::async_trait;
use lw_core::{Direction, FormData, Size};

/// Notification surface (flash box, inline form error box)
pub trait Surface: Clone + Send + Sync + 'static {
    /// Replace the message markup.
    fn set_html(&self, html: &str);

    /// Start the reveal transition. Returns immediately.
    fn reveal(&self);

    /// Start the conceal transition. Returns immediately.
    fn conceal(&self);
}

/// Form element whose submission is intercepted
pub trait FormElement: Clone + Send + Sync + 'static {
    /// URL the form posts to.
    fn action(&self) -> String;

    /// Current field values, in document order.
    fn fields(&self) -> FormData;
}

/// Transient panel positioned next to the pointer
#[async_trait]
pub trait PanelSurface: Clone + Send + Sync + 'static {
    /// Natural outer size, measured with a hidden render pass.
    fn measure(&self) -> Size;

    /// Move the (hidden) panel to page coordinates.
    fn move_to(&self, top: f64, left: f64);

    /// Slide the panel in from `direction`; resolves when the animation ends.
    async fn slide_in(&self, direction: Direction);

    /// Slide the panel out toward `direction`; resolves when the animation ends.
    async fn slide_out(&self, direction: Direction);
}
