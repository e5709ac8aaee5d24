// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for external I/O: the server transport and the page's DOM
//! surfaces.

pub mod surface;
pub mod traced;
pub mod transport;

pub use surface::{FormElement, NoOpPanelSurface, NoOpSurface, PanelSurface, Surface};
pub use traced::{TracedPanelSurface, TracedTransport};
pub use transport::{HttpTransport, Transport, TransportError};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use surface::{FakeForm, FakePanelSurface, FakeSurface, PanelCall, SurfaceCall};
#[cfg(any(test, feature = "test-support"))]
pub use transport::{FakeTransport, TransportCall};
