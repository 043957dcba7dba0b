// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=easel_view2d --heading-base-level=0

//! Easel View 2D: the drawing editor's scrollable, zoomable viewport.
//!
//! A [`Viewport`] is a world‑space upper‑left corner plus a scaling factor
//! (screen pixels per world unit). It provides:
//! - Stepped zoom: the factor doubles or halves inside `[0.25, 4.0]`.
//! - Absolute scrollbar positioning of the upper‑left corner.
//! - World ↔ screen conversion, `screen = (world - upper_left) * scale`.
//!
//! It does **not** talk to any widget toolkit. Zoom operations return a
//! [`ZoomUpdate`] describing the zoom label and scrollbar values the shell
//! should show; the caller decides how to apply it.
//!
//! ## Minimal example
//!
//! ```rust
//! use easel_vector::Vector2;
//! use easel_view2d::Viewport;
//! use kurbo::Point;
//!
//! let mut view = Viewport::default();
//! assert_eq!(view.upper_left(), Vector2::new(1024.0, 1024.0));
//!
//! let update = view.zoom_in().expect("1.0 is below the maximum");
//! assert_eq!(update.scaling_factor, 2.0);
//! assert_eq!(update.knob_size, 256);
//!
//! // The world point at the upper-left corner lands on the screen origin.
//! let screen = view.world_to_view_point(view.upper_left().to_point());
//! assert_eq!(screen, Point::ZERO);
//! ```
//!
//! ## Zoom bounds
//!
//! Requests beyond the configured bounds are silent no‑ops:
//!
//! ```rust
//! use easel_view2d::Viewport;
//!
//! let mut view = Viewport::default();
//! while view.zoom_out().is_some() {}
//! assert_eq!(view.scaling_factor(), 0.25);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod viewport;

pub use config::ViewportConfig;
pub use viewport::{Viewport, ViewportDebugInfo, ViewportState, ZoomUpdate};
