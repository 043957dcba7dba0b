// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=easel_vector --heading-base-level=0

//! Easel Vector: small linear-algebra value types.
//!
//! This crate provides the numeric building blocks shared by the Easel
//! viewport, camera, and renderer crates:
//! - [`Vector2`]: an immutable 2D vector with dot products, orthogonals and
//!   unit normals.
//! - [`Vector3H`]: a 3D vector in homogeneous coordinates `(x, y, z, w)` with
//!   tolerance-based equality.
//! - [`Point3D`]: a plain 3D point.
//! - [`Matrix4`]: a row-major 4×4 matrix acting on [`Vector3H`] columns.
//!
//! Every type is `Copy` and every operation returns a new value.
//!
//! ## Unit normals
//!
//! ```rust
//! use easel_vector::Vector2;
//!
//! let a = Vector2::new(0.0, 0.0);
//! let b = Vector2::new(10.0, 0.0);
//! let n = Vector2::unit_normal(a, b).unwrap();
//! assert_eq!(n, Vector2::new(-0.0, 1.0));
//!
//! // Coincident points have no normal.
//! assert!(Vector2::unit_normal(a, a).is_err());
//! ```
//!
//! ## Homogeneous coordinates
//!
//! ```rust
//! use easel_vector::{Matrix4, Vector3H};
//!
//! let p = Vector3H::new(1.0, 2.0, 3.0);
//! let moved = Matrix4::translation(10.0, 0.0, 0.0) * p;
//! assert_eq!(moved, Vector3H::new(11.0, 2.0, 3.0));
//! assert_eq!(Vector3H::from_array(moved.to_array()), moved);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod matrix4;
mod vector2;
mod vector3h;

pub use matrix4::Matrix4;
pub use vector2::{DegenerateSegmentError, Vector2};
pub use vector3h::{Point3D, TOLERANCE, Vector3H, approx_eq};
