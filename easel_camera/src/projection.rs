// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use easel_vector::{Matrix4, Vector3H};

/// Which projection the clip matrix uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ProjectionKind {
    /// Perspective projection; distant lines shrink.
    #[default]
    Perspective,
    /// Parallel projection; sizes do not depend on depth.
    Orthographic,
}

/// Camera → clip space projection parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    /// Projection kind.
    pub kind: ProjectionKind,
    /// Vertical field of view in radians (perspective only).
    pub fov_y: f64,
    /// Half the visible extent in world units (orthographic only).
    pub ortho_half_extent: f64,
    /// Distance to the near clipping plane.
    pub near: f64,
    /// Distance to the far clipping plane.
    pub far: f64,
}

impl Projection {
    /// Camera → clip matrix.
    ///
    /// After the perspective divide, visible points land in the canonical
    /// cube `[-1, 1]³`, with the near plane at `z = -1`.
    #[must_use]
    pub fn clip_matrix(&self) -> Matrix4 {
        let (n, f) = (self.near, self.far);
        match self.kind {
            ProjectionKind::Perspective => {
                let zoom = 1.0 / libm::tan(self.fov_y / 2.0);
                Matrix4::from_rows([
                    [zoom, 0.0, 0.0, 0.0],
                    [0.0, zoom, 0.0, 0.0],
                    [0.0, 0.0, (f + n) / (f - n), -2.0 * n * f / (f - n)],
                    [0.0, 0.0, 1.0, 0.0],
                ])
            }
            ProjectionKind::Orthographic => {
                let zoom = 1.0 / self.ortho_half_extent;
                Matrix4::from_rows([
                    [zoom, 0.0, 0.0, 0.0],
                    [0.0, zoom, 0.0, 0.0],
                    [0.0, 0.0, 2.0 / (f - n), -(f + n) / (f - n)],
                    [0.0, 0.0, 0.0, 1.0],
                ])
            }
        }
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            kind: ProjectionKind::Perspective,
            fov_y: core::f64::consts::FRAC_PI_3,
            ortho_half_extent: 20.0,
            near: 1.0,
            far: 100.0,
        }
    }
}

/// The transforms a [`crate::Scene`] needs to place its geometry on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraTransform {
    /// World → camera.
    pub view: Matrix4,
    /// Camera → clip.
    pub clip: Matrix4,
}

impl CameraTransform {
    /// World → clip, `clip * view`.
    #[must_use]
    pub fn world_to_clip(&self) -> Matrix4 {
        self.clip * self.view
    }

    /// Returns `true` if the clip-space segment `a → b` should be dropped.
    ///
    /// A segment is rejected when either end lies in front of the near plane,
    /// or when both ends lie outside the same side of the view volume. A
    /// segment that merely crosses a side plane is kept; the 2D renderer
    /// clips it on screen.
    #[must_use]
    pub fn rejects(a: Vector3H, b: Vector3H) -> bool {
        if a.z < -a.w || b.z < -b.w {
            return true;
        }
        let outside = |v: Vector3H| {
            [
                v.x < -v.w,
                v.x > v.w,
                v.y < -v.w,
                v.y > v.w,
                v.z > v.w,
            ]
        };
        let (oa, ob) = (outside(a), outside(b));
        oa.iter().zip(ob.iter()).any(|(a, b)| *a && *b)
    }
}

impl Default for CameraTransform {
    fn default() -> Self {
        Self {
            view: Matrix4::IDENTITY,
            clip: Projection::default().clip_matrix(),
        }
    }
}
