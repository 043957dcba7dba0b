// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=easel_imaging --heading-base-level=0

//! Easel Imaging: backend-agnostic draw operations.
//!
//! This crate defines the small imaging vocabulary the Easel renderer speaks
//! and the [`Surface`] trait that concrete backends implement.
//!
//! # Core concepts
//!
//! - **State operations** ([`StateOp`]) mutate the current transform, paint
//!   and stroke style.
//! - **Draw operations** ([`DrawOp`]) produce pixels from geometry given in
//!   local coordinates; the current transform maps them to the device.
//! - **Surfaces** ([`Surface`]) accept both. A surface wraps whatever the
//!   host toolkit draws into: a canvas, a GPU scene, or a recorder for tests
//!   (see `easel_imaging_ref`).
//!
//! Geometry and colour types come from [`kurbo`] and [`peniko`] and are
//! re-exported here so that backends need only depend on this crate.
//!
//! # Example
//!
//! ```ignore
//! # use easel_imaging::*;
//! # struct MyCanvas { /* implements Surface */ }
//! # impl Surface for MyCanvas { /* ... */ }
//! let mut canvas = MyCanvas { /* ... */ };
//!
//! canvas.set_transform(Affine::scale(2.0));
//! canvas.set_paint(Color::WHITE);
//! canvas.draw(DrawOp::FillRect(Rect::new(0.0, 0.0, 10.0, 10.0)));
//! ```

#![no_std]

pub use kurbo::{self, Affine, BezPath, Ellipse, Line, Point, Rect, Stroke};
pub use peniko::{self, Color};

/// State operations that mutate the current imaging state.
#[derive(Clone, Debug, PartialEq)]
pub enum StateOp {
    /// Set the current local → device transform.
    SetTransform(Affine),
    /// Set the current paint colour used by fills and strokes.
    SetPaint(Color),
    /// Set the current stroke style.
    ///
    /// Stroke widths are in device pixels; they do not scale with the
    /// current transform.
    SetStroke(Stroke),
}

/// Draw operations that produce pixels given the current state.
///
/// All geometry is in local coordinates and is mapped through the current
/// transform.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Fill an axis-aligned rectangle with the current paint.
    FillRect(Rect),
    /// Stroke an axis-aligned rectangle with the current stroke and paint.
    StrokeRect(Rect),
    /// Fill an ellipse with the current paint.
    FillEllipse(Ellipse),
    /// Stroke an ellipse with the current stroke and paint.
    StrokeEllipse(Ellipse),
    /// Stroke a single line segment.
    StrokeLine(Line),
    /// Fill an arbitrary path.
    FillPath(BezPath),
    /// Stroke an arbitrary path.
    StrokePath(BezPath),
}

/// A state or draw operation, in the order it was issued.
#[derive(Clone, Debug, PartialEq)]
pub enum ImagingOp {
    /// State operation.
    State(StateOp),
    /// Draw operation.
    Draw(DrawOp),
}

/// Something the renderer can draw into.
///
/// Implementations apply operations in the order they are received. The
/// initial state is an identity transform, opaque black paint and a
/// one-pixel stroke.
pub trait Surface {
    /// Apply a state operation.
    fn state(&mut self, op: StateOp);

    /// Apply a draw operation.
    fn draw(&mut self, op: DrawOp);

    /// Set the current transform.
    ///
    /// This is equivalent to `self.state(StateOp::SetTransform(transform))`.
    #[inline]
    fn set_transform(&mut self, transform: Affine) {
        self.state(StateOp::SetTransform(transform));
    }

    /// Set the current paint.
    ///
    /// This is equivalent to `self.state(StateOp::SetPaint(color))`.
    #[inline]
    fn set_paint(&mut self, color: Color) {
        self.state(StateOp::SetPaint(color));
    }

    /// Set a plain stroke of the given device-pixel width.
    #[inline]
    fn set_stroke_width(&mut self, width: f64) {
        self.state(StateOp::SetStroke(Stroke::new(width)));
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn state(&mut self, op: StateOp) {
        (**self).state(op);
    }

    fn draw(&mut self, op: DrawOp) {
        (**self).draw(op);
    }
}
