// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Constants that shape a [`crate::Viewport`].
///
/// The defaults describe a 2048×2048 world viewed through a 512 pixel
/// window, zoomable from a quarter to four times magnification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportConfig {
    /// World units visible along each axis at a scaling factor of `1.0`.
    pub viewport_size: f64,
    /// Half of the world extent; the initial upper-left corner sits at
    /// `(half_world_size, half_world_size)`.
    pub half_world_size: f64,
    /// Smallest allowed scaling factor.
    pub min_scale: f64,
    /// Largest allowed scaling factor.
    pub max_scale: f64,
}

impl ViewportConfig {
    /// Default visible extent at scale `1.0`.
    pub const VIEWPORT_SIZE: f64 = 512.0;
    /// Default half world size.
    pub const HALF_WORLD_SIZE: f64 = 1024.0;
    /// Default minimum scaling factor.
    pub const MIN_SCALE: f64 = 0.25;
    /// Default maximum scaling factor.
    pub const MAX_SCALE: f64 = 4.0;

    /// Full world extent along each axis.
    #[must_use]
    pub fn world_size(&self) -> f64 {
        self.half_world_size * 2.0
    }

    /// Returns a copy with `min_scale <= max_scale`.
    #[must_use]
    pub(crate) fn normalized(self) -> Self {
        if self.min_scale <= self.max_scale {
            self
        } else {
            Self {
                min_scale: self.max_scale,
                max_scale: self.min_scale,
                ..self
            }
        }
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            viewport_size: Self::VIEWPORT_SIZE,
            half_world_size: Self::HALF_WORLD_SIZE,
            min_scale: Self::MIN_SCALE,
            max_scale: Self::MAX_SCALE,
        }
    }
}
