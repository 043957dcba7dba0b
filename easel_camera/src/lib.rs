// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=easel_camera --heading-base-level=0

//! Easel Camera: a keyboard-driven virtual camera for the 3D wireframe scene.
//!
//! The camera holds a [`CameraPose`] (position plus yaw about the world Y
//! axis) and a [`Projection`]. Discrete [`CameraKey`] commands move and turn
//! it; [`VirtualCamera::update_scene`] recomputes the homogeneous transforms
//! and writes them into a [`Scene`]. That write is the only point where the
//! camera becomes visible to the rest of the editor.
//!
//! Movement is gated by an enable flag. While disabled, keys are ignored and
//! no scene update is issued.
//!
//! ## Minimal example
//!
//! ```rust
//! use easel_camera::{CameraKey, Scene, VirtualCamera, WireScene};
//!
//! let mut camera = VirtualCamera::default();
//! let mut scene = WireScene::new();
//!
//! // Disabled by default: nothing happens.
//! camera.queue_key(CameraKey::Forward);
//! assert!(!camera.update_scene(&mut scene));
//!
//! camera.toggle_movement_enabled();
//! camera.queue_key(CameraKey::Forward);
//! camera.queue_key(CameraKey::TurnRight);
//! assert!(camera.update_scene(&mut scene));
//! assert_eq!(scene.camera(), camera.transform());
//! ```
//!
//! ## Coordinate conventions
//!
//! World and camera space are both Y‑up. At yaw `0` the camera looks along
//! +Z with +X to its right. Positive yaw turns the view towards +X.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod camera;
mod key;
mod pose;
mod projection;
mod scene;

pub use camera::{CameraConfig, VirtualCamera};
pub use key::CameraKey;
pub use pose::CameraPose;
pub use projection::{CameraTransform, Projection, ProjectionKind};
pub use scene::{Line3D, Scene, WireScene};
