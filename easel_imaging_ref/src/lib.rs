// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=easel_imaging_ref --heading-base-level=0

//! Easel Imaging Reference Surface.
//!
//! This crate provides [`RecordingSurface`], a small, stateful
//! implementation of [`Surface`] for **op recording and state tracing**.
//!
//! It is intentionally *not* a renderer:
//! - It does **not** rasterize to pixels.
//! - It is intended for tests and debugging that want to assert on emitted
//!   ops and on the imaging state at the time each op was applied.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use easel_imaging::{Affine, Color, DrawOp, ImagingOp, StateOp, Stroke, Surface};

/// Snapshot of the current imaging state inside the surface.
#[derive(Clone, Debug, PartialEq)]
pub struct StateSnapshot {
    /// Current transform.
    pub transform: Affine,
    /// Current paint.
    pub paint: Color,
    /// Current stroke style.
    pub stroke: Stroke,
}

impl Default for StateSnapshot {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            paint: Color::BLACK,
            stroke: Stroke::new(1.0),
        }
    }
}

/// Event recorded by the surface.
#[derive(Clone, Debug)]
pub enum Event {
    /// State operation and the resulting state snapshot.
    State {
        /// State operation that was applied.
        op: StateOp,
        /// Snapshot after applying the state operation.
        state: StateSnapshot,
    },
    /// Draw operation and the state snapshot used for drawing.
    Draw {
        /// Draw operation that was applied.
        op: DrawOp,
        /// Snapshot at the time of drawing.
        state: StateSnapshot,
    },
}

/// Surface that records everything it is asked to do.
#[derive(Default, Debug)]
pub struct RecordingSurface {
    /// Log of events in the order they were applied.
    events: Vec<Event>,
    /// Underlying imaging ops.
    ops: Vec<ImagingOp>,
    /// Current imaging state.
    state: StateSnapshot,
}

impl RecordingSurface {
    /// Creates an empty surface in the default state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a slice of recorded events.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns a slice of raw imaging operations.
    #[must_use]
    pub fn ops(&self) -> &[ImagingOp] {
        &self.ops
    }

    /// Draw operations only, in order, each with the state it was drawn in.
    pub fn draws(&self) -> impl Iterator<Item = (&DrawOp, &StateSnapshot)> {
        self.events.iter().filter_map(|event| match event {
            Event::Draw { op, state } => Some((op, state)),
            Event::State { .. } => None,
        })
    }

    /// Current imaging state.
    #[must_use]
    pub fn current_state(&self) -> &StateSnapshot {
        &self.state
    }

    /// Clears all recorded events and ops but keeps the current state.
    pub fn clear_events(&mut self) {
        self.events.clear();
        self.ops.clear();
    }
}

impl Surface for RecordingSurface {
    fn state(&mut self, op: StateOp) {
        match &op {
            StateOp::SetTransform(tx) => self.state.transform = *tx,
            StateOp::SetPaint(color) => self.state.paint = *color,
            StateOp::SetStroke(style) => self.state.stroke = style.clone(),
        }

        self.ops.push(ImagingOp::State(op.clone()));
        self.events.push(Event::State {
            op,
            state: self.state.clone(),
        });
    }

    fn draw(&mut self, op: DrawOp) {
        self.ops.push(ImagingOp::Draw(op.clone()));
        self.events.push(Event::Draw {
            op,
            state: self.state.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_imaging::{Line, Point, Rect};

    #[test]
    fn basic_state_and_draw() {
        let mut surface = RecordingSurface::default();

        surface.set_paint(Color::WHITE);
        surface.draw(DrawOp::FillRect(Rect::new(0.0, 0.0, 4.0, 4.0)));

        assert_eq!(surface.events().len(), 2);
        assert_eq!(surface.ops().len(), 2);
    }

    #[test]
    fn draws_carry_the_state_they_were_issued_in() {
        let mut surface = RecordingSurface::default();
        let line = Line::new(Point::ZERO, Point::new(1.0, 1.0));

        surface.draw(DrawOp::StrokeLine(line));
        surface.set_transform(Affine::scale(2.0));
        surface.set_stroke_width(3.0);
        surface.draw(DrawOp::StrokeLine(line));

        let draws: Vec<_> = surface.draws().collect();
        assert_eq!(draws.len(), 2);
        assert_eq!(draws[0].1.transform, Affine::IDENTITY);
        assert_eq!(draws[1].1.transform, Affine::scale(2.0));
        assert_eq!(draws[1].1.stroke.width, 3.0);
    }

    #[test]
    fn state_snapshot_updates() {
        let mut surface = RecordingSurface::default();

        surface.set_transform(Affine::translate((5.0, 0.0)));
        surface.set_paint(Color::WHITE);

        let last = surface.events().last().expect("at least one event");
        let Event::State { state, .. } = last else {
            panic!("expected final event to be State");
        };

        assert_eq!(state.transform, Affine::translate((5.0, 0.0)));
        assert_eq!(state.paint, Color::WHITE);
    }

    #[test]
    fn clear_events_keeps_state() {
        let mut surface = RecordingSurface::default();

        surface.set_transform(Affine::scale(0.5));
        surface.draw(DrawOp::StrokeRect(Rect::new(0.0, 0.0, 1.0, 1.0)));
        assert_eq!(surface.events().len(), 2);

        surface.clear_events();
        assert!(surface.events().is_empty());
        assert!(surface.ops().is_empty());
        assert_eq!(surface.current_state().transform, Affine::scale(0.5));
    }
}
