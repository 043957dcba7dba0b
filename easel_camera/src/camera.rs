// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;

use crate::key::CameraKey;
use crate::pose::CameraPose;
use crate::projection::{CameraTransform, Projection, ProjectionKind};
use crate::scene::Scene;

/// Keys held inline before the queue spills to the heap.
const INLINE_KEYS: usize = 16;

/// Tuning constants for a [`VirtualCamera`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraConfig {
    /// Pose restored by [`CameraKey::Home`] and used at construction.
    pub home: CameraPose,
    /// World units moved per movement key.
    pub move_step: f64,
    /// Radians turned per turn key.
    pub turn_step: f64,
    /// Maximum number of keys waiting for the next [`VirtualCamera::update_scene`].
    pub queue_capacity: usize,
    /// Initial projection.
    pub projection: Projection,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            home: CameraPose::default(),
            move_step: 1.0,
            turn_step: 5.0_f64.to_radians(),
            queue_capacity: 64,
            projection: Projection::default(),
        }
    }
}

/// Virtual camera driven by discrete key commands.
///
/// Key commands can be applied immediately with [`VirtualCamera::key_pressed`]
/// or queued with [`VirtualCamera::queue_key`] and drained, in arrival order,
/// by the next [`VirtualCamera::update_scene`]. Both are ignored while
/// movement is disabled.
#[derive(Clone, Debug)]
pub struct VirtualCamera {
    config: CameraConfig,
    pose: CameraPose,
    projection: Projection,
    movement_enabled: bool,
    pending: SmallVec<[CameraKey; INLINE_KEYS]>,
}

impl VirtualCamera {
    /// Creates a camera at the configured home pose with movement disabled.
    #[must_use]
    pub fn new(config: CameraConfig) -> Self {
        Self {
            config,
            pose: config.home,
            projection: config.projection,
            movement_enabled: false,
            pending: SmallVec::new(),
        }
    }

    /// Returns the camera configuration.
    #[must_use]
    pub fn config(&self) -> CameraConfig {
        self.config
    }

    /// Current pose.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    /// Current projection.
    #[must_use]
    pub fn projection(&self) -> Projection {
        self.projection
    }

    /// Whether key commands currently move the camera.
    #[must_use]
    pub fn is_movement_enabled(&self) -> bool {
        self.movement_enabled
    }

    /// Flips the movement flag and returns the new value.
    ///
    /// Disabling movement discards any queued keys.
    pub fn toggle_movement_enabled(&mut self) -> bool {
        self.set_movement_enabled(!self.movement_enabled);
        self.movement_enabled
    }

    /// Sets the movement flag.
    pub fn set_movement_enabled(&mut self, enabled: bool) {
        self.movement_enabled = enabled;
        if !enabled {
            self.pending.clear();
        }
    }

    /// Applies one command immediately.
    ///
    /// Returns `false` (and does nothing) while movement is disabled.
    pub fn key_pressed(&mut self, key: CameraKey) -> bool {
        if !self.movement_enabled {
            return false;
        }
        self.apply(key);
        true
    }

    /// Queues a command for the next [`VirtualCamera::update_scene`].
    ///
    /// Returns `false` if movement is disabled or the queue is full; a key
    /// arriving at a full queue is dropped.
    pub fn queue_key(&mut self, key: CameraKey) -> bool {
        if !self.movement_enabled {
            return false;
        }
        if self.pending.len() >= self.config.queue_capacity {
            log::warn!("camera key queue full, dropping {key:?}");
            return false;
        }
        self.pending.push(key);
        true
    }

    /// Keys waiting for the next update, oldest first.
    #[must_use]
    pub fn pending_keys(&self) -> &[CameraKey] {
        &self.pending
    }

    /// Drains queued keys in order, then writes the camera transforms into
    /// `scene`.
    ///
    /// Returns `false` without touching the scene while movement is disabled.
    pub fn update_scene<S: Scene + ?Sized>(&mut self, scene: &mut S) -> bool {
        if !self.movement_enabled {
            return false;
        }
        let pending = core::mem::take(&mut self.pending);
        for key in pending {
            self.apply(key);
        }
        let transform = self.transform();
        log::debug!(
            "camera at ({}, {}, {}) yaw {}",
            self.pose.position.x,
            self.pose.position.y,
            self.pose.position.z,
            self.pose.yaw
        );
        scene.set_camera(transform);
        true
    }

    /// World → camera and camera → clip transforms for the current state.
    #[must_use]
    pub fn transform(&self) -> CameraTransform {
        CameraTransform {
            view: self.pose.view_matrix(),
            clip: self.projection.clip_matrix(),
        }
    }

    fn apply(&mut self, key: CameraKey) {
        let step = self.config.move_step;
        let turn = self.config.turn_step;
        self.pose = match key {
            CameraKey::Forward => self.pose.moved(step, 0.0, 0.0),
            CameraKey::Back => self.pose.moved(-step, 0.0, 0.0),
            CameraKey::Left => self.pose.moved(0.0, -step, 0.0),
            CameraKey::Right => self.pose.moved(0.0, step, 0.0),
            CameraKey::Up => self.pose.moved(0.0, 0.0, step),
            CameraKey::Down => self.pose.moved(0.0, 0.0, -step),
            CameraKey::TurnLeft => self.pose.turned(-turn),
            CameraKey::TurnRight => self.pose.turned(turn),
            CameraKey::Home => self.config.home,
            CameraKey::Orthographic => {
                self.projection.kind = ProjectionKind::Orthographic;
                self.pose
            }
            CameraKey::Perspective => {
                self.projection.kind = ProjectionKind::Perspective;
                self.pose
            }
        };
    }
}

impl Default for VirtualCamera {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}
