// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference shapes and their drawables.

use easel_imaging::{DrawOp, Surface};
use easel_vector::Vector2;
use kurbo::{BezPath, Ellipse, Line, Point, Rect, Vec2};
use peniko::Color;

use crate::drawable::{DrawError, Drawable, DrawableFactory, DrawingParameters, Shape};

/// Colour of selection outlines and handles.
pub const OUTLINE_COLOR: Color = Color::from_rgb8(255, 0, 0);

/// Handle size in screen pixels.
const HANDLE_PIXELS: f64 = 8.0;

/// Gap in screen pixels between a shape and its rotation handle.
const ROTATION_HANDLE_GAP: f64 = 15.0;

/// World-space geometry of a [`BasicShape`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapeGeometry {
    /// A straight segment.
    Line {
        /// First end point.
        start: Point,
        /// Second end point.
        end: Point,
    },
    /// An axis-aligned rectangle (squares included).
    Rectangle(Rect),
    /// An axis-aligned ellipse (circles included).
    Ellipse {
        /// Centre point.
        center: Point,
        /// Horizontal and vertical radii.
        radii: Vec2,
    },
    /// A triangle.
    Triangle([Point; 3]),
}

impl ShapeGeometry {
    fn is_finite(&self) -> bool {
        match self {
            Self::Line { start, end } => {
                Vector2::from(*start).is_finite() && Vector2::from(*end).is_finite()
            }
            Self::Rectangle(rect) => rect.is_finite(),
            Self::Ellipse { center, radii } => center.is_finite() && radii.is_finite(),
            Self::Triangle(points) => points.iter().all(|p| p.is_finite()),
        }
    }

    fn bounding_box(&self) -> Rect {
        match self {
            Self::Line { start, end } => Rect::from_points(*start, *end),
            Self::Rectangle(rect) => rect.abs(),
            Self::Ellipse { center, radii } => {
                Rect::from_center_size(*center, (radii.x.abs() * 2.0, radii.y.abs() * 2.0))
            }
            Self::Triangle([a, b, c]) => Rect::from_points(*a, *b).union_pt(*c),
        }
    }
}

/// A coloured, selectable shape from the reference catalogue.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BasicShape {
    /// Geometry in world coordinates.
    pub geometry: ShapeGeometry,
    /// Fill colour (stroke colour for lines).
    pub color: Color,
    selected: bool,
}

impl BasicShape {
    /// Creates an unselected shape.
    #[must_use]
    pub const fn new(geometry: ShapeGeometry, color: Color) -> Self {
        Self {
            geometry,
            color,
            selected: false,
        }
    }

    /// A line segment.
    #[must_use]
    pub fn line(start: Point, end: Point, color: Color) -> Self {
        Self::new(ShapeGeometry::Line { start, end }, color)
    }

    /// A rectangle spanning two corners.
    #[must_use]
    pub fn rectangle(p0: Point, p1: Point, color: Color) -> Self {
        Self::new(ShapeGeometry::Rectangle(Rect::from_points(p0, p1)), color)
    }

    /// A square with the given upper-left corner and side length.
    #[must_use]
    pub fn square(upper_left: Point, size: f64, color: Color) -> Self {
        Self::new(
            ShapeGeometry::Rectangle(Rect::from_origin_size(upper_left, (size, size))),
            color,
        )
    }

    /// An axis-aligned ellipse.
    #[must_use]
    pub fn ellipse(center: Point, radii: Vec2, color: Color) -> Self {
        Self::new(ShapeGeometry::Ellipse { center, radii }, color)
    }

    /// A circle.
    #[must_use]
    pub fn circle(center: Point, radius: f64, color: Color) -> Self {
        Self::ellipse(center, Vec2::new(radius, radius), color)
    }

    /// A triangle.
    #[must_use]
    pub fn triangle(a: Point, b: Point, c: Point, color: Color) -> Self {
        Self::new(ShapeGeometry::Triangle([a, b, c]), color)
    }
}

impl Shape for BasicShape {
    fn is_selected(&self) -> bool {
        self.selected
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

/// Drawable for a [`BasicShape`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BasicDrawable {
    geometry: ShapeGeometry,
    color: Color,
}

impl Drawable for BasicDrawable {
    fn draw(&self, surface: &mut dyn Surface, _params: &DrawingParameters) -> Result<(), DrawError> {
        if !self.geometry.is_finite() {
            return Err(DrawError::NonFiniteGeometry);
        }
        surface.set_paint(self.color);
        let op = match self.geometry {
            ShapeGeometry::Line { start, end } => {
                surface.set_stroke_width(1.0);
                DrawOp::StrokeLine(Line::new(start, end))
            }
            ShapeGeometry::Rectangle(rect) => DrawOp::FillRect(rect),
            ShapeGeometry::Ellipse { center, radii } => {
                DrawOp::FillEllipse(Ellipse::new(center, radii, 0.0))
            }
            ShapeGeometry::Triangle(points) => DrawOp::FillPath(polygon(&points)),
        };
        surface.draw(op);
        Ok(())
    }

    fn draw_outline(
        &self,
        surface: &mut dyn Surface,
        params: &DrawingParameters,
    ) -> Result<(), DrawError> {
        if !self.geometry.is_finite() {
            return Err(DrawError::NonFiniteGeometry);
        }
        let handle_radius = params.pixels_to_world(HANDLE_PIXELS / 2.0);

        // Compute everything fallible before emitting ops.
        let ops = match self.geometry {
            ShapeGeometry::Line { start, end } => {
                let normal = Vector2::unit_normal(start.into(), end.into())?;
                let offset = normal.scale(handle_radius).to_vec2();
                let band = polygon(&[start + offset, end + offset, end - offset, start - offset]);
                [
                    Some(DrawOp::StrokePath(band)),
                    Some(handle(start, handle_radius)),
                    Some(handle(end, handle_radius)),
                    None,
                ]
            }
            ShapeGeometry::Triangle(points) => [
                Some(DrawOp::StrokePath(polygon(&points))),
                Some(handle(points[0], handle_radius)),
                Some(handle(points[1], handle_radius)),
                Some(handle(points[2], handle_radius)),
            ],
            ShapeGeometry::Rectangle(_) | ShapeGeometry::Ellipse { .. } => {
                let bbox = self.geometry.bounding_box();
                let gap = params.pixels_to_world(ROTATION_HANDLE_GAP);
                let rotation = Point::new(bbox.center().x, bbox.y0 - gap);
                [
                    Some(DrawOp::StrokeRect(bbox)),
                    Some(handle(rotation, handle_radius)),
                    None,
                    None,
                ]
            }
        };

        surface.set_paint(OUTLINE_COLOR);
        surface.set_stroke_width(1.0);
        for op in ops.into_iter().flatten() {
            surface.draw(op);
        }
        Ok(())
    }
}

/// Factory for [`BasicDrawable`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct BasicFactory;

impl DrawableFactory<BasicShape> for BasicFactory {
    type Drawable = BasicDrawable;

    fn create_drawable(&self, shape: &BasicShape) -> BasicDrawable {
        BasicDrawable {
            geometry: shape.geometry,
            color: shape.color,
        }
    }
}

fn handle(center: Point, radius: f64) -> DrawOp {
    DrawOp::StrokeEllipse(Ellipse::new(center, (radius, radius), 0.0))
}

fn polygon(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    if let Some((first, rest)) = points.split_first() {
        path.move_to(*first);
        for p in rest {
            path.line_to(*p);
        }
        path.close_path();
    }
    path
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use alloc::vec::Vec;

    use easel_imaging::DrawOp;
    use easel_imaging_ref::RecordingSurface;
    use easel_view2d::Viewport;
    use kurbo::{Point, Vec2};
    use peniko::Color;

    use super::{BasicFactory, BasicShape, OUTLINE_COLOR};
    use crate::drawable::{DrawError, Drawable, DrawableFactory, DrawingParameters, Shape};

    fn params() -> DrawingParameters {
        DrawingParameters::from_viewport(&Viewport::default())
    }

    fn draw_ops(surface: &RecordingSurface) -> Vec<DrawOp> {
        surface.draws().map(|(op, _)| op.clone()).collect()
    }

    #[test]
    fn each_kind_emits_one_fill_or_stroke() {
        let shapes = [
            BasicShape::line(Point::ZERO, Point::new(5.0, 5.0), Color::WHITE),
            BasicShape::square(Point::new(1.0, 1.0), 4.0, Color::WHITE),
            BasicShape::circle(Point::new(3.0, 3.0), 2.0, Color::WHITE),
            BasicShape::triangle(Point::ZERO, Point::new(4.0, 0.0), Point::new(0.0, 3.0), Color::WHITE),
        ];
        let mut surface = RecordingSurface::new();
        for shape in &shapes {
            BasicFactory
                .create_drawable(shape)
                .draw(&mut surface, &params())
                .unwrap();
        }
        let ops = draw_ops(&surface);
        assert!(matches!(ops[0], DrawOp::StrokeLine(_)));
        assert!(matches!(ops[1], DrawOp::FillRect(_)));
        assert!(matches!(ops[2], DrawOp::FillEllipse(_)));
        assert!(matches!(ops[3], DrawOp::FillPath(_)));
        assert_eq!(ops.len(), 4);
    }

    #[test]
    fn outline_uses_outline_color() {
        let shape = BasicShape::ellipse(Point::new(10.0, 10.0), Vec2::new(4.0, 2.0), Color::WHITE);
        let mut surface = RecordingSurface::new();
        BasicFactory
            .create_drawable(&shape)
            .draw_outline(&mut surface, &params())
            .unwrap();
        let (first, state) = surface.draws().next().unwrap();
        assert_eq!(state.paint, OUTLINE_COLOR);
        let DrawOp::StrokeRect(rect) = first else {
            panic!("expected bounding box, got {first:?}");
        };
        assert_eq!(rect.width(), 8.0);
        assert_eq!(rect.height(), 4.0);
    }

    #[test]
    fn handles_keep_their_screen_size() {
        let shape = BasicShape::triangle(
            Point::ZERO,
            Point::new(40.0, 0.0),
            Point::new(0.0, 30.0),
            Color::WHITE,
        );
        let mut viewport = Viewport::default();
        viewport.zoom_in().unwrap();
        let params = DrawingParameters::from_viewport(&viewport);

        let mut surface = RecordingSurface::new();
        BasicFactory
            .create_drawable(&shape)
            .draw_outline(&mut surface, &params)
            .unwrap();
        let ops = draw_ops(&surface);
        assert_eq!(ops.len(), 4);
        let DrawOp::StrokeEllipse(handle) = &ops[1] else {
            panic!("expected handle, got {:?}", ops[1]);
        };
        // 8 px handle at 2x zoom is 2 world units of radius.
        assert!((handle.radii().x - 2.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_line_outline_fails_without_drawing() {
        let p = Point::new(3.0, 3.0);
        let shape = BasicShape::line(p, p, Color::WHITE);
        let drawable = BasicFactory.create_drawable(&shape);
        let mut surface = RecordingSurface::new();

        // The line itself still draws.
        drawable.draw(&mut surface, &params()).unwrap();
        surface.clear_events();

        let err = drawable.draw_outline(&mut surface, &params()).unwrap_err();
        assert!(matches!(err, DrawError::DegenerateSegment(_)));
        assert!(surface.events().is_empty());
    }

    #[test]
    fn non_finite_geometry_is_rejected() {
        let shape = BasicShape::circle(Point::new(f64::NAN, 0.0), 1.0, Color::WHITE);
        let mut surface = RecordingSurface::new();
        let result = BasicFactory.create_drawable(&shape).draw(&mut surface, &params());
        assert_eq!(result, Err(DrawError::NonFiniteGeometry));
        assert!(surface.ops().is_empty());

        let line = BasicShape::line(Point::ZERO, Point::new(f64::INFINITY, 1.0), Color::WHITE);
        let drawable = BasicFactory.create_drawable(&line);
        assert_eq!(drawable.draw(&mut surface, &params()), Err(DrawError::NonFiniteGeometry));
        assert_eq!(
            drawable.draw_outline(&mut surface, &params()),
            Err(DrawError::NonFiniteGeometry)
        );
        assert!(surface.ops().is_empty());
    }

    #[test]
    fn selection_flag_round_trips() {
        let mut shape = BasicShape::square(Point::ZERO, 1.0, Color::WHITE);
        assert!(!shape.is_selected());
        shape.set_selected(true);
        assert!(shape.is_selected());
        // Selection does not change what gets drawn.
        let mut copy = shape;
        copy.set_selected(false);
        assert_eq!(
            BasicFactory.create_drawable(&shape),
            BasicFactory.create_drawable(&copy)
        );
    }
}
