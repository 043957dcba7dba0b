// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Mul;

use crate::Vector3H;

/// Row-major 4×4 matrix over homogeneous coordinates.
///
/// Vectors are treated as columns, so `a * b * v` applies `b` first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix4 {
    rows: [[f64; 4]; 4],
}

impl Matrix4 {
    /// The identity transform.
    pub const IDENTITY: Self = Self::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    /// Creates a matrix from its rows.
    #[must_use]
    pub const fn from_rows(rows: [[f64; 4]; 4]) -> Self {
        Self { rows }
    }

    /// Returns the rows of this matrix.
    #[must_use]
    pub const fn rows(&self) -> [[f64; 4]; 4] {
        self.rows
    }

    /// Translation by `(x, y, z)`.
    #[must_use]
    pub const fn translation(x: f64, y: f64, z: f64) -> Self {
        Self::from_rows([
            [1.0, 0.0, 0.0, x],
            [0.0, 1.0, 0.0, y],
            [0.0, 0.0, 1.0, z],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Non-uniform scale along the three axes.
    #[must_use]
    pub const fn scale(x: f64, y: f64, z: f64) -> Self {
        Self::from_rows([
            [x, 0.0, 0.0, 0.0],
            [0.0, y, 0.0, 0.0],
            [0.0, 0.0, z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation by `angle` radians about the Y axis.
    ///
    /// Positive angles turn +Z towards +X.
    #[must_use]
    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = (libm::sin(angle), libm::cos(angle));
        Self::from_rows([
            [c, 0.0, s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Matrix4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut out = [[0.0; 4]; 4];
        for (r, out_row) in out.iter_mut().enumerate() {
            for (c, cell) in out_row.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.rows[r][k] * rhs.rows[k][c]).sum();
            }
        }
        Self::from_rows(out)
    }
}

impl Mul<Vector3H> for Matrix4 {
    type Output = Vector3H;

    fn mul(self, rhs: Vector3H) -> Vector3H {
        let v = rhs.to_array();
        let mut out = [0.0; 4];
        for (cell, row) in out.iter_mut().zip(self.rows.iter()) {
            *cell = row.iter().zip(v.iter()).map(|(a, b)| a * b).sum();
        }
        Vector3H::from_array(out)
    }
}
