// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use easel_vector::Vector2;
use kurbo::{Affine, Point, Rect};

use crate::config::ViewportConfig;

/// The mutable part of a [`Viewport`]: where it looks and how closely.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    /// World-space point shown at the screen origin.
    pub upper_left: Vector2,
    /// Screen pixels per world unit.
    pub scaling_factor: f64,
}

/// What the shell should display after a zoom step.
///
/// Produced by [`Viewport::zoom_in`] and [`Viewport::zoom_out`]. Scrollbar
/// values are in whole world units, as scrollbars expect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomUpdate {
    /// New scaling factor, for the zoom label.
    pub scaling_factor: f64,
    /// Knob size for both scrollbars: the visible world extent.
    pub knob_size: i32,
    /// Horizontal scrollbar position: the upper-left x coordinate.
    pub h_position: i32,
    /// Vertical scrollbar position: the upper-left y coordinate.
    pub v_position: i32,
}

/// Scrollable, zoomable 2D viewport over the drawing's world space.
///
/// `Viewport` tracks a world-space upper-left corner and a scaling factor and
/// derives the world → screen transform from them:
///
/// ```text
/// screen = (world - upper_left) * scaling_factor
/// ```
///
/// The scaling factor only ever doubles or halves and stays within
/// [`ViewportConfig::min_scale`]..=[`ViewportConfig::max_scale`]. The
/// upper-left corner is positioned absolutely by the scrollbars and is not
/// clamped here; the scrollbar range supplied by the shell bounds it.
#[derive(Clone, Debug)]
pub struct Viewport {
    config: ViewportConfig,
    upper_left: Vector2,
    scaling_factor: f64,
    world_to_view: Affine,
    view_to_world: Affine,
}

impl Viewport {
    /// Creates a viewport at scale `1.0` looking at
    /// `(half_world_size, half_world_size)`.
    ///
    /// The zoom range is normalized so that `min_scale <= max_scale`, and the
    /// initial scale is clamped into it.
    #[must_use]
    pub fn new(config: ViewportConfig) -> Self {
        let config = config.normalized();
        let mut vp = Self {
            config,
            upper_left: Vector2::new(config.half_world_size, config.half_world_size),
            scaling_factor: 1.0_f64.clamp(config.min_scale, config.max_scale),
            world_to_view: Affine::IDENTITY,
            view_to_world: Affine::IDENTITY,
        };
        vp.rebuild_transforms();
        vp
    }

    /// Returns the configuration this viewport was built with.
    #[must_use]
    pub fn config(&self) -> ViewportConfig {
        self.config
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn state(&self) -> ViewportState {
        ViewportState {
            upper_left: self.upper_left,
            scaling_factor: self.scaling_factor,
        }
    }

    /// World-space point shown at the screen origin.
    #[must_use]
    pub fn upper_left(&self) -> Vector2 {
        self.upper_left
    }

    /// Current scaling factor (screen pixels per world unit).
    #[must_use]
    pub fn scaling_factor(&self) -> f64 {
        self.scaling_factor
    }

    /// Doubles the scaling factor unless it is already at the maximum.
    ///
    /// After doubling, the upper-left corner moves by
    /// `viewport_size / scaling_factor` (using the new factor) along both
    /// axes. Returns the values the shell should now display, or `None` if
    /// the viewport was already at the maximum and nothing changed.
    pub fn zoom_in(&mut self) -> Option<ZoomUpdate> {
        if self.scaling_factor >= self.config.max_scale {
            log::trace!("zoom in ignored at scale {}", self.scaling_factor);
            return None;
        }
        self.scaling_factor *= 2.0;
        let shift = self.config.viewport_size / self.scaling_factor;
        self.upper_left = self.upper_left + Vector2::new(shift, shift);
        Some(self.zoom_changed())
    }

    /// Halves the scaling factor unless it is already at the minimum.
    ///
    /// After halving, the upper-left corner moves by
    /// `-viewport_size / scaling_factor` (using the new factor) along both
    /// axes. Returns `None` if the viewport was already at the minimum.
    pub fn zoom_out(&mut self) -> Option<ZoomUpdate> {
        if self.scaling_factor <= self.config.min_scale {
            log::trace!("zoom out ignored at scale {}", self.scaling_factor);
            return None;
        }
        self.scaling_factor /= 2.0;
        let shift = self.config.viewport_size / self.scaling_factor;
        self.upper_left = self.upper_left - Vector2::new(shift, shift);
        Some(self.zoom_changed())
    }

    /// Applies a horizontal scrollbar value.
    ///
    /// A non-zero value becomes the new upper-left x coordinate. Zero leaves
    /// the viewport unchanged.
    pub fn set_horizontal_scroll(&mut self, value: i32) {
        log::debug!("hScroll: {value}");
        if value != 0 {
            self.upper_left.x = f64::from(value);
            self.rebuild_transforms();
        }
    }

    /// Applies a vertical scrollbar value.
    ///
    /// A non-zero value becomes the new upper-left y coordinate. Zero leaves
    /// the viewport unchanged.
    pub fn set_vertical_scroll(&mut self, value: i32) {
        log::debug!("vScroll: {value}");
        if value != 0 {
            self.upper_left.y = f64::from(value);
            self.rebuild_transforms();
        }
    }

    /// Shell values describing the current zoom and scroll state.
    #[must_use]
    pub fn zoom_update(&self) -> ZoomUpdate {
        ZoomUpdate {
            scaling_factor: self.scaling_factor,
            knob_size: scroll_units(self.visible_extent()),
            h_position: scroll_units(self.upper_left.x),
            v_position: scroll_units(self.upper_left.y),
        }
    }

    /// World units visible along each axis at the current scale.
    #[must_use]
    pub fn visible_extent(&self) -> f64 {
        self.config.viewport_size / self.scaling_factor
    }

    /// Screen-space rectangle covered by the viewport.
    #[must_use]
    pub fn view_rect(&self) -> Rect {
        let size = self.config.viewport_size;
        Rect::new(0.0, 0.0, size, size)
    }

    /// World-space rectangle currently visible.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        self.view_to_world_rect(self.view_rect())
    }

    /// World → screen transform.
    #[must_use]
    pub fn world_to_view(&self) -> Affine {
        self.world_to_view
    }

    /// Screen → world transform.
    #[must_use]
    pub fn view_to_world(&self) -> Affine {
        self.view_to_world
    }

    /// Converts a world-space point into screen coordinates.
    #[must_use]
    pub fn world_to_view_point(&self, pt: Point) -> Point {
        self.world_to_view * pt
    }

    /// Converts a screen-space point into world coordinates.
    #[must_use]
    pub fn view_to_world_point(&self, pt: Point) -> Point {
        self.view_to_world * pt
    }

    /// Converts a world-space rectangle into screen coordinates.
    #[must_use]
    pub fn world_to_view_rect(&self, rect: Rect) -> Rect {
        map_rect(self.world_to_view, rect)
    }

    /// Converts a screen-space rectangle into world coordinates.
    #[must_use]
    pub fn view_to_world_rect(&self, rect: Rect) -> Rect {
        map_rect(self.view_to_world, rect)
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            config: self.config,
            state: self.state(),
            visible_world_rect: self.visible_world_rect(),
            can_zoom_in: self.scaling_factor < self.config.max_scale,
            can_zoom_out: self.scaling_factor > self.config.min_scale,
        }
    }

    fn zoom_changed(&mut self) -> ZoomUpdate {
        self.rebuild_transforms();
        log::debug!(
            "zoomed to {} at ({}, {})",
            self.scaling_factor,
            self.upper_left.x,
            self.upper_left.y
        );
        self.zoom_update()
    }

    fn rebuild_transforms(&mut self) {
        // World → view: move the upper-left corner to the origin, then scale.
        self.world_to_view =
            Affine::scale(self.scaling_factor) * Affine::translate(-self.upper_left.to_vec2());
        self.view_to_world = self.world_to_view.inverse();
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(ViewportConfig::default())
    }
}

/// Debug snapshot of a [`Viewport`].
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Configuration constants.
    pub config: ViewportConfig,
    /// Upper-left corner and scaling factor.
    pub state: ViewportState,
    /// World-space rectangle currently visible.
    pub visible_world_rect: Rect,
    /// Whether another [`Viewport::zoom_in`] would change anything.
    pub can_zoom_in: bool,
    /// Whether another [`Viewport::zoom_out`] would change anything.
    pub can_zoom_out: bool,
}

fn map_rect(transform: Affine, rect: Rect) -> Rect {
    // Bounding box of the transformed corners; exact for the axis-aligned,
    // uniform scale used here.
    let q0 = transform * Point::new(rect.x0, rect.y0);
    let q1 = transform * Point::new(rect.x1, rect.y1);
    Rect::from_points(q0, q1)
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "scrollbars take whole units; fractional parts are dropped"
)]
fn scroll_units(value: f64) -> i32 {
    value as i32
}
