// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Viewport-aware placement of transient panels.
//!
//! A panel opens at the pointer position. If it would run past the bottom of
//! the viewport it opens upward instead; if it would run past the right edge
//! it shifts left by its own width. All coordinates are page coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Room left between a panel and the viewport edge.
pub const DEFAULT_SPACING: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Natural (outer) size of a panel, measured before placement.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Visible window: scroll offset plus dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub scroll_top: f64,
    pub scroll_left: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(scroll_top: f64, scroll_left: f64, width: f64, height: f64) -> Self {
        Self {
            scroll_top,
            scroll_left,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.scroll_top + self.height
    }

    pub fn right(&self) -> f64 {
        self.scroll_left + self.width
    }
}

/// Edge a panel grows from when revealed; conceal mirrors it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    #[default]
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// Final position of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub top: f64,
    pub left: f64,
    pub direction: Direction,
}

/// Compute where a panel of `size` opened at `anchor` should go.
pub fn place(anchor: Point, size: Size, viewport: Viewport, spacing: f64) -> Placement {
    let mut top = anchor.y;
    let mut left = anchor.x;
    let mut direction = Direction::Down;

    if top + size.height + spacing > viewport.bottom() {
        direction = Direction::Up;
        top = anchor.y - size.height;
    }
    // Horizontal overflow only shifts; it never changes the reveal direction.
    if left + size.width + spacing > viewport.right() {
        left = anchor.x - size.width;
    }

    Placement {
        top,
        left,
        direction,
    }
}

#[cfg(test)]
#[path = "placement_tests.rs"]
mod tests;
