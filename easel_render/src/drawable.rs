// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use easel_imaging::Surface;
use easel_vector::DegenerateSegmentError;
use easel_view2d::Viewport;
use kurbo::Affine;

/// Capability every drawable model shape provides.
pub trait Shape {
    /// Whether this shape is the current selection.
    fn is_selected(&self) -> bool;

    /// Marks or unmarks this shape as selected.
    fn set_selected(&mut self, selected: bool);
}

/// Read access to a drawing's shapes.
pub trait ShapeModel {
    /// Shape type stored by the model.
    type Shape: Shape;

    /// Shapes in back-to-front paint order.
    ///
    /// Models store their shapes topmost first, so paint order is the
    /// reverse of storage order.
    fn shapes_reversed(&self) -> impl Iterator<Item = &Self::Shape>;
}

/// Everything a [`Drawable`] needs to place itself on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawingParameters {
    /// World → screen transform of the active viewport.
    pub world_to_view: Affine,
    /// Screen pixels per world unit.
    pub scaling_factor: f64,
}

impl DrawingParameters {
    /// Parameters for the given viewport.
    #[must_use]
    pub fn from_viewport(viewport: &Viewport) -> Self {
        Self {
            world_to_view: viewport.world_to_view(),
            scaling_factor: viewport.scaling_factor(),
        }
    }

    /// Converts a length in screen pixels into world units.
    #[must_use]
    pub fn pixels_to_world(&self, pixels: f64) -> f64 {
        pixels / self.scaling_factor
    }
}

/// A shape that knows how to draw itself in world coordinates.
///
/// The renderer sets the surface transform to
/// [`DrawingParameters::world_to_view`] before each call.
pub trait Drawable {
    /// Draws the shape.
    ///
    /// # Errors
    ///
    /// Returns a [`DrawError`] if the geometry cannot be drawn. Nothing is
    /// guaranteed about ops already emitted when this fails.
    fn draw(&self, surface: &mut dyn Surface, params: &DrawingParameters) -> Result<(), DrawError>;

    /// Draws the selection outline and handles.
    ///
    /// # Errors
    ///
    /// Returns a [`DrawError`] if the outline geometry is degenerate.
    fn draw_outline(
        &self,
        surface: &mut dyn Surface,
        params: &DrawingParameters,
    ) -> Result<(), DrawError>;
}

/// Turns model shapes into drawables.
pub trait DrawableFactory<S: ?Sized> {
    /// Drawable produced for each shape.
    type Drawable: Drawable;

    /// Builds the drawable for `shape`.
    fn create_drawable(&self, shape: &S) -> Self::Drawable;
}

/// Failure to draw a single shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawError {
    /// A segment needed a normal but had zero length.
    DegenerateSegment(DegenerateSegmentError),
    /// A coordinate was NaN or infinite.
    NonFiniteGeometry,
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateSegment(err) => write!(f, "cannot draw shape: {err}"),
            Self::NonFiniteGeometry => f.write_str("cannot draw shape: non-finite coordinates"),
        }
    }
}

impl core::error::Error for DrawError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::DegenerateSegment(err) => Some(err),
            Self::NonFiniteGeometry => None,
        }
    }
}

impl From<DegenerateSegmentError> for DrawError {
    fn from(err: DegenerateSegmentError) -> Self {
        Self::DegenerateSegment(err)
    }
}
