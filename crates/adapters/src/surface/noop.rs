// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op surface adapters.

use super::{PanelSurface, Surface};
use async_trait::async_trait;
use lw_core::{Direction, Size};

/// Surface that renders nothing.
///
/// Used for channels a page does not display, e.g. a headless page runtime.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpSurface;

impl NoOpSurface {
    pub fn new() -> Self {
        Self
    }
}

impl Surface for NoOpSurface {
    fn set_html(&self, _html: &str) {}

    fn reveal(&self) {}

    fn conceal(&self) {}
}

/// Panel with zero size whose animations complete immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpPanelSurface;

impl NoOpPanelSurface {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PanelSurface for NoOpPanelSurface {
    fn measure(&self) -> Size {
        Size::default()
    }

    fn move_to(&self, _top: f64, _left: f64) {}

    async fn slide_in(&self, _direction: Direction) {}

    async fn slide_out(&self, _direction: Direction) {}
}

#[cfg(test)]
#[path = "noop_tests.rs"]
mod tests;
