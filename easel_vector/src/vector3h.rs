// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Relative tolerance used by [`Vector3H`] equality.
pub const TOLERANCE: f64 = 1e-11;

/// Returns `true` if `a` and `b` agree within [`TOLERANCE`].
///
/// Values compare equal when they are identical or when `|a / b - 1|` is
/// below the tolerance. When either value is zero there is no meaningful
/// ratio, so the absolute difference `|a - b|` is compared instead. The
/// result does not depend on argument order.
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }
    if a == 0.0 || b == 0.0 {
        return libm::fabs(a - b) < TOLERANCE;
    }
    libm::fabs(a / b - 1.0) < TOLERANCE
}

/// A point in 3D space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point3D {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

impl Point3D {
    /// The origin.
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a point from its coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A 3D vector in homogeneous coordinates.
///
/// Equality is tolerance based (see [`approx_eq`]) because homogeneous
/// coordinates pick up rounding error as they pass through transforms.
#[derive(Clone, Copy, Debug)]
pub struct Vector3H {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
    /// Homogeneous component.
    pub w: f64,
}

impl Vector3H {
    /// Creates a vector with `w = 1`.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self::with_w(x, y, z, 1.0)
    }

    /// Creates a vector with an explicit homogeneous component.
    #[must_use]
    pub const fn with_w(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Lifts a 3D point into homogeneous space with `w = 1`.
    #[must_use]
    pub const fn from_point(p: Point3D) -> Self {
        Self::new(p.x, p.y, p.z)
    }

    /// Builds a vector from `[x, y, z, w]`.
    #[must_use]
    pub const fn from_array(a: [f64; 4]) -> Self {
        Self::with_w(a[0], a[1], a[2], a[3])
    }

    /// Returns `[x, y, z, w]`.
    #[must_use]
    pub const fn to_array(self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Drops the homogeneous component.
    ///
    /// This does **not** divide by `w`; callers holding a projected vector
    /// should use [`Vector3H::perspective_divide`] instead.
    #[must_use]
    pub const fn to_point3d(self) -> Point3D {
        Point3D::new(self.x, self.y, self.z)
    }

    /// Divides `x`, `y` and `z` by `w`.
    ///
    /// Returns `None` for points at infinity (`w == 0`).
    #[must_use]
    pub fn perspective_divide(self) -> Option<Point3D> {
        if self.w == 0.0 {
            return None;
        }
        Some(Point3D::new(
            self.x / self.w,
            self.y / self.w,
            self.z / self.w,
        ))
    }
}

impl From<Point3D> for Vector3H {
    fn from(p: Point3D) -> Self {
        Self::from_point(p)
    }
}

impl From<[f64; 4]> for Vector3H {
    fn from(a: [f64; 4]) -> Self {
        Self::from_array(a)
    }
}

impl PartialEq for Vector3H {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.x, other.x)
            && approx_eq(self.y, other.y)
            && approx_eq(self.z, other.z)
            && approx_eq(self.w, other.w)
    }
}

impl fmt::Display for Vector3H {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|{}, {}, {}, {}|", self.x, self.y, self.z, self.w)
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use alloc::format;

    use super::{Point3D, Vector3H, approx_eq};

    #[test]
    fn bare_point_defaults_w_to_one() {
        let v = Vector3H::new(1.0, 2.0, 3.0);
        assert_eq!(v.w, 1.0);
        assert_eq!(Vector3H::from(Point3D::new(1.0, 2.0, 3.0)).to_array(), [1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn array_round_trip_is_exact() {
        let cases = [
            Vector3H::new(0.0, 0.0, 0.0),
            Vector3H::with_w(1.5, -2.25, 1e300, 0.0),
            Vector3H::with_w(-0.0, 1e-300, 7.0, -3.0),
        ];
        for v in cases {
            let back = Vector3H::from_array(v.to_array());
            assert_eq!(back, v);
            assert_eq!(back.to_array(), v.to_array());
        }
    }

    #[test]
    fn to_point3d_keeps_w_out_of_the_result() {
        let v = Vector3H::with_w(2.0, 4.0, 6.0, 2.0);
        assert_eq!(v.to_point3d(), Point3D::new(2.0, 4.0, 6.0));
        assert_eq!(v.perspective_divide(), Some(Point3D::new(1.0, 2.0, 3.0)));
        assert_eq!(Vector3H::with_w(1.0, 1.0, 1.0, 0.0).perspective_divide(), None);
    }

    #[test]
    fn equality_tolerates_rounding() {
        let a = Vector3H::new(0.1 + 0.2, 1.0, 3.0);
        let b = Vector3H::new(0.3, 1.0, 3.0);
        assert_ne!(a.x, b.x);
        assert_eq!(a, b);
        assert_ne!(a, Vector3H::new(0.3001, 1.0, 3.0));
    }

    #[test]
    fn equality_checks_every_component() {
        let a = Vector3H::with_w(1.0, 2.0, 3.0, 1.0);
        assert_ne!(a, Vector3H::with_w(1.0, 2.0, 3.0, 2.0));
        assert_ne!(a, Vector3H::with_w(1.0, 2.0, 4.0, 1.0));
    }

    #[test]
    fn comparing_against_zero_uses_absolute_difference() {
        assert!(approx_eq(1e-13, 0.0));
        assert!(!approx_eq(1e-3, 0.0));
        assert!(!approx_eq(1.0, 0.0));
        assert_eq!(
            Vector3H::new(1e-14, 0.0, 0.0),
            Vector3H::new(0.0, 0.0, 0.0)
        );
    }

    #[test]
    fn equality_is_symmetric_near_zero() {
        let tiny = Vector3H::new(1e-14, 0.0, 0.0);
        let zero = Vector3H::new(0.0, 0.0, 0.0);
        assert_eq!(tiny, zero);
        assert_eq!(zero, tiny);
        assert!(approx_eq(0.0, 1e-13));
        assert!(!approx_eq(0.0, 1e-3));

        let pairs = [(1e-14, 0.0), (0.1 + 0.2, 0.3), (1.0, 0.0), (2.0, 2.0 + 1e-9)];
        for (a, b) in pairs {
            assert_eq!(approx_eq(a, b), approx_eq(b, a), "{a} vs {b}");
        }
    }

    #[test]
    fn display_lists_all_components() {
        assert_eq!(format!("{}", Vector3H::new(1.0, 2.0, 3.0)), "|1, 2, 3, 1|");
    }
}
