// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use easel_vector::{Matrix4, Point3D};

/// Camera position and heading.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    /// Camera position in world space.
    pub position: Point3D,
    /// Heading in radians about the world Y axis; `0` looks along +Z.
    pub yaw: f64,
}

impl CameraPose {
    /// Creates a pose.
    #[must_use]
    pub const fn new(position: Point3D, yaw: f64) -> Self {
        Self { position, yaw }
    }

    /// Unit viewing direction projected onto the ground plane.
    #[must_use]
    pub fn forward(&self) -> (f64, f64) {
        (libm::sin(self.yaw), libm::cos(self.yaw))
    }

    /// Unit direction to the camera's right on the ground plane.
    #[must_use]
    pub fn right(&self) -> (f64, f64) {
        (libm::cos(self.yaw), -libm::sin(self.yaw))
    }

    /// Returns the pose moved by `forward` along the heading, `right`
    /// sideways, and `up` along world Y.
    #[must_use]
    pub fn moved(self, forward: f64, right: f64, up: f64) -> Self {
        let (fx, fz) = self.forward();
        let (rx, rz) = self.right();
        let p = self.position;
        Self {
            position: Point3D::new(
                p.x + fx * forward + rx * right,
                p.y + up,
                p.z + fz * forward + rz * right,
            ),
            yaw: self.yaw,
        }
    }

    /// Returns the pose turned by `angle` radians (positive turns right).
    #[must_use]
    pub fn turned(self, angle: f64) -> Self {
        Self {
            position: self.position,
            yaw: self.yaw + angle,
        }
    }

    /// World → camera transform.
    ///
    /// Translates the camera position to the origin, then rotates so that
    /// the heading lines up with +Z.
    #[must_use]
    pub fn view_matrix(&self) -> Matrix4 {
        let p = self.position;
        Matrix4::rotation_y(-self.yaw) * Matrix4::translation(-p.x, -p.y, -p.z)
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::new(Point3D::new(0.0, 3.0, -20.0), 0.0)
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::FRAC_PI_2;

    use easel_vector::{Point3D, Vector3H};

    use super::CameraPose;

    #[test]
    fn camera_position_maps_to_origin() {
        let pose = CameraPose::new(Point3D::new(4.0, 1.0, -7.0), 0.3);
        let v = pose.view_matrix() * Vector3H::from_point(pose.position);
        assert_eq!(v, Vector3H::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn point_ahead_lands_on_positive_z() {
        let pose = CameraPose::new(Point3D::ORIGIN, FRAC_PI_2);
        // Heading +X after a quarter turn.
        let v = pose.view_matrix() * Vector3H::new(5.0, 0.0, 0.0);
        assert_eq!(v, Vector3H::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn moving_follows_heading() {
        let pose = CameraPose::new(Point3D::ORIGIN, FRAC_PI_2).moved(2.0, 1.0, 3.0);
        assert!((pose.position.x - 2.0).abs() < 1e-12);
        assert!((pose.position.y - 3.0).abs() < 1e-12);
        assert!((pose.position.z - -1.0).abs() < 1e-12);
    }
}
