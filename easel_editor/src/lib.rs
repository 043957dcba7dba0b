// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=easel_editor --heading-base-level=0

//! Easel Editor: session glue between a UI shell and the Easel pipeline.
//!
//! [`DrawingView`] owns everything an editing session needs: the shape
//! model, the [`easel_view2d::Viewport`], the [`easel_camera::VirtualCamera`]
//! and its [`easel_camera::WireScene`]. The shell forwards widget events to
//! it (zoom buttons, scrollbars, held keys) and implements [`ViewShell`] so
//! the view can update widgets and request repaints.
//!
//! ## Change messages
//!
//! Models do not call back into the view. Instead they record
//! [`ModelChange`] messages, exposed through [`ChangeSource`]. The shell
//! calls [`DrawingView::pump_changes`] once per event-loop turn; any number
//! of pending changes collapse into a single refresh request.
//!
//! ## Example
//!
//! ```rust
//! use easel_editor::{DrawingView, ShapeList, ViewShell};
//! use easel_render::{BasicFactory, BasicShape};
//! use kurbo::Point;
//! use peniko::Color;
//!
//! #[derive(Default)]
//! struct Shell {
//!     zoom_label: f64,
//!     repaints: usize,
//! }
//!
//! impl ViewShell for Shell {
//!     fn set_zoom_text(&mut self, scaling_factor: f64) {
//!         self.zoom_label = scaling_factor;
//!     }
//!     fn set_h_scroll_knob(&mut self, _: i32) {}
//!     fn set_h_scroll_position(&mut self, _: i32) {}
//!     fn set_v_scroll_knob(&mut self, _: i32) {}
//!     fn set_v_scroll_position(&mut self, _: i32) {}
//!     fn refresh(&mut self) {
//!         self.repaints += 1;
//!     }
//! }
//!
//! let shapes = ShapeList::<BasicShape>::new();
//! let mut view = DrawingView::new(shapes, BasicFactory, Shell::default());
//!
//! view.model_mut()
//!     .add(BasicShape::circle(Point::new(1100.0, 1100.0), 30.0, Color::WHITE));
//! view.model_mut().select(Some(0));
//! view.pump_changes();
//! assert_eq!(view.shell().repaints, 1);
//!
//! view.zoom_in_button_hit();
//! assert_eq!(view.shell().zoom_label, 2.0);
//! assert_eq!(view.shell().repaints, 2);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod change;
mod model;
mod shell;
mod view;

pub use change::{ChangeQueue, ChangeSet, ChangeSource, ModelChange};
pub use model::ShapeList;
pub use shell::ViewShell;
pub use view::DrawingView;
