// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use easel_vector::Point3D;
use peniko::Color;

use crate::projection::CameraTransform;

/// A 3D scene that can be viewed through a camera.
///
/// The camera pushes its transforms in through [`Scene::set_camera`]; the
/// scene keeps them alongside its geometry so the renderer can project it.
pub trait Scene {
    /// Replaces the scene's camera transforms.
    fn set_camera(&mut self, camera: CameraTransform);
}

/// A single coloured line segment in world space.
#[derive(Clone, Copy, Debug)]
pub struct Line3D {
    /// Segment start.
    pub start: Point3D,
    /// Segment end.
    pub end: Point3D,
    /// Stroke colour.
    pub color: Color,
}

impl Line3D {
    /// Creates a segment.
    #[must_use]
    pub const fn new(start: Point3D, end: Point3D, color: Color) -> Self {
        Self { start, end, color }
    }
}

/// A wireframe scene: a flat list of 3D line segments plus the current
/// camera transforms.
#[derive(Clone, Debug, Default)]
pub struct WireScene {
    lines: Vec<Line3D>,
    camera: CameraTransform,
}

impl WireScene {
    /// Creates an empty scene with an identity view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment.
    pub fn push_line(&mut self, line: Line3D) {
        self.lines.push(line);
    }

    /// Appends the twelve edges of an axis-aligned box.
    pub fn push_box(&mut self, min: Point3D, max: Point3D, color: Color) {
        let corner = |i: u8| {
            Point3D::new(
                if i & 1 == 0 { min.x } else { max.x },
                if i & 2 == 0 { min.y } else { max.y },
                if i & 4 == 0 { min.z } else { max.z },
            )
        };
        for i in 0..8_u8 {
            for bit in [1_u8, 2, 4] {
                if i & bit == 0 {
                    self.push_line(Line3D::new(corner(i), corner(i | bit), color));
                }
            }
        }
    }

    /// Segments in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[Line3D] {
        &self.lines
    }

    /// The transforms most recently written by a camera.
    #[must_use]
    pub fn camera(&self) -> CameraTransform {
        self.camera
    }
}

impl Scene for WireScene {
    fn set_camera(&mut self, camera: CameraTransform) {
        self.camera = camera;
    }
}
