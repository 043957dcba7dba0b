// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=easel_render --heading-base-level=0

//! Easel Render: turns a shape model into imaging operations.
//!
//! A frame is produced in two independent passes:
//!
//! - [`RenderPipeline::render`] paints the 2D drawing. Shapes come from a
//!   [`ShapeModel`] in back-to-front order, a [`DrawableFactory`] turns each
//!   one into a [`Drawable`], and every drawable is issued against the
//!   viewport's world → view transform. The selection outline is painted
//!   after everything else.
//! - [`render_wireframe`] projects the segments of an
//!   [`easel_camera::WireScene`] through the scene's camera and strokes the
//!   survivors over the drawing.
//!
//! [`BasicShape`] and [`BasicFactory`] are a small catalogue of reference
//! shapes (lines, rectangles, ellipses and triangles) that exercise the
//! whole path.
//!
//! ## Example
//!
//! ```rust
//! use easel_render::{BasicFactory, BasicShape, RenderPipeline, Shape, ShapeModel};
//! use easel_imaging::{DrawOp, Surface};
//! use easel_view2d::Viewport;
//! use kurbo::Point;
//! use peniko::Color;
//!
//! struct Drawing(Vec<BasicShape>);
//!
//! impl ShapeModel for Drawing {
//!     type Shape = BasicShape;
//!     fn shapes_reversed(&self) -> impl Iterator<Item = &BasicShape> {
//!         self.0.iter().rev()
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Counter(usize);
//!
//! impl Surface for Counter {
//!     fn state(&mut self, _: easel_imaging::StateOp) {}
//!     fn draw(&mut self, _: DrawOp) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let mut circle = BasicShape::circle(Point::new(100.0, 100.0), 20.0, Color::WHITE);
//! circle.set_selected(true);
//! let drawing = Drawing(vec![circle]);
//!
//! let mut surface = Counter::default();
//! let stats = RenderPipeline::render(&drawing, &BasicFactory, &Viewport::default(), &mut surface);
//! assert_eq!(stats.drawn, 1);
//! assert!(stats.outline_drawn);
//! // Fill, bounding box, rotation handle.
//! assert_eq!(surface.0, 3);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod basic;
mod drawable;
mod pipeline;
mod wireframe;

pub use basic::{BasicDrawable, BasicFactory, BasicShape, OUTLINE_COLOR, ShapeGeometry};
pub use drawable::{DrawError, Drawable, DrawableFactory, DrawingParameters, Shape, ShapeModel};
pub use pipeline::{FrameStats, RenderPipeline};
pub use wireframe::{canonical_to_world, project_segment, render_wireframe};
