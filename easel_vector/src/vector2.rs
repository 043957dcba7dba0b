// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use kurbo::{Point, Vec2};

/// Error returned when a unit normal is requested for a zero-length segment.
///
/// Both end points coincide, so the segment has no direction and no normal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DegenerateSegmentError {
    /// The point both ends of the segment collapse to.
    pub at: Vector2,
}

impl fmt::Display for DegenerateSegmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "segment from ({}, {}) to itself has no unit normal",
            self.at.x, self.at.y
        )
    }
}

impl core::error::Error for DegenerateSegmentError {}

/// An immutable vector with two entries.
///
/// Equality is exact component comparison; it is meant for tests and
/// debugging, not for geometric predicates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2 {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Vector2 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a vector from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Dot product of `self` and `other`.
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Componentwise `self + other`.
    #[allow(
        clippy::should_implement_trait,
        reason = "`Add` is implemented too and delegates here"
    )]
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Componentwise `self - other`.
    #[must_use]
    pub fn subtract(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    /// Rotates the vector by 90° counter-clockwise: `(-y, x)`.
    #[must_use]
    pub fn orthogonalize(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Euclidean length measured from the origin.
    #[must_use]
    pub fn length(self) -> f64 {
        self.distance(Self::ZERO)
    }

    /// Distance between `self` and `start`.
    #[must_use]
    pub fn distance(self, start: Self) -> f64 {
        let dx = self.x - start.x;
        let dy = self.y - start.y;
        libm::sqrt(dx * dx + dy * dy)
    }

    /// Multiplies both components by `k`.
    #[must_use]
    pub fn scale(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k)
    }

    /// Unit-length normal of the segment `p1 → p2`.
    ///
    /// The normal is the segment direction rotated 90° counter-clockwise
    /// (see [`Vector2::orthogonalize`]), scaled to length one.
    ///
    /// # Errors
    ///
    /// Returns [`DegenerateSegmentError`] when `p1 == p2`.
    pub fn unit_normal(p1: Self, p2: Self) -> Result<Self, DegenerateSegmentError> {
        let difference = p2.subtract(p1);
        let length = difference.length();
        if length == 0.0 {
            return Err(DegenerateSegmentError { at: p1 });
        }
        Ok(difference.orthogonalize().scale(1.0 / length))
    }

    /// Returns `true` if both components are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Converts to a [`kurbo::Point`].
    #[must_use]
    pub fn to_point(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Converts to a [`kurbo::Vec2`].
    #[must_use]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::add(self, rhs)
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.subtract(rhs)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl From<Point> for Vector2 {
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Vec2> for Vector2 {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]\n[{}]", self.x, self.y)
    }
}
