// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use easel_camera::{CameraTransform, WireScene};
use easel_imaging::{DrawOp, Surface};
use easel_vector::{Point3D, Vector3H};
use easel_view2d::Viewport;
use kurbo::{Line, Point};

/// Maps a point in canonical view coordinates (`x`, `y` in `[-1, 1]`, Y up)
/// onto the square world, Y down.
#[must_use]
pub fn canonical_to_world(p: Point3D, world_size: f64) -> Point {
    let half = world_size / 2.0;
    Point::new(half * (p.x + 1.0), half * (1.0 - p.y))
}

/// Projects one world-space segment to world-plane coordinates.
///
/// Returns `None` if the segment is rejected by the view volume or an end
/// point cannot be divided through.
#[must_use]
pub fn project_segment(
    camera: &CameraTransform,
    start: Point3D,
    end: Point3D,
    world_size: f64,
) -> Option<Line> {
    let m = camera.world_to_clip();
    let a = m * Vector3H::from_point(start);
    let b = m * Vector3H::from_point(end);
    if CameraTransform::rejects(a, b) {
        return None;
    }
    let a = a.perspective_divide()?;
    let b = b.perspective_divide()?;
    Some(Line::new(
        canonical_to_world(a, world_size),
        canonical_to_world(b, world_size),
    ))
}

/// Draws a [`WireScene`] as seen from its camera, overlaid on the 2D view.
///
/// Returns the number of segments drawn.
pub fn render_wireframe(scene: &WireScene, viewport: &Viewport, surface: &mut dyn Surface) -> usize {
    let camera = scene.camera();
    let world_size = viewport.config().world_size();
    surface.set_transform(viewport.world_to_view());
    surface.set_stroke_width(1.0);

    let mut drawn = 0;
    for line in scene.lines() {
        let Some(segment) = project_segment(&camera, line.start, line.end, world_size) else {
            continue;
        };
        surface.set_paint(line.color);
        surface.draw(DrawOp::StrokeLine(segment));
        drawn += 1;
    }
    log::trace!("wireframe: {drawn} of {} segments drawn", scene.lines().len());
    drawn
}

#[cfg(test)]
mod tests {
    use easel_camera::{CameraTransform, Line3D, Scene, VirtualCamera, WireScene};
    use easel_imaging::DrawOp;
    use easel_imaging_ref::RecordingSurface;
    use easel_vector::Point3D;
    use easel_view2d::Viewport;
    use kurbo::Point;
    use peniko::Color;

    use super::{canonical_to_world, project_segment, render_wireframe};

    const WORLD: f64 = 2048.0;

    #[test]
    fn canonical_corners_map_to_world_corners() {
        assert_eq!(canonical_to_world(Point3D::new(-1.0, 1.0, 0.0), WORLD), Point::ZERO);
        assert_eq!(
            canonical_to_world(Point3D::new(1.0, -1.0, 0.0), WORLD),
            Point::new(WORLD, WORLD)
        );
        assert_eq!(
            canonical_to_world(Point3D::ORIGIN, WORLD),
            Point::new(WORLD / 2.0, WORLD / 2.0)
        );
    }

    #[test]
    fn segment_ahead_of_camera_projects_about_center() {
        let camera = CameraTransform::default();
        let line = project_segment(
            &camera,
            Point3D::new(-1.0, 0.0, 10.0),
            Point3D::new(1.0, 0.0, 10.0),
            WORLD,
        )
        .unwrap();
        assert!((line.p0.y - WORLD / 2.0).abs() < 1e-9);
        assert!((line.p0.x + line.p1.x - WORLD).abs() < 1e-9);
        assert!(line.p0.x < line.p1.x);
    }

    #[test]
    fn segment_behind_camera_is_rejected() {
        let camera = CameraTransform::default();
        let behind = project_segment(
            &camera,
            Point3D::new(0.0, 0.0, -5.0),
            Point3D::new(0.0, 0.0, 10.0),
            WORLD,
        );
        assert_eq!(behind, None);
    }

    #[test]
    fn segment_off_to_one_side_is_rejected() {
        let camera = CameraTransform::default();
        let off = project_segment(
            &camera,
            Point3D::new(500.0, 0.0, 10.0),
            Point3D::new(600.0, 0.0, 10.0),
            WORLD,
        );
        assert_eq!(off, None);
    }

    #[test]
    fn scene_renders_with_line_colors() {
        let mut scene = WireScene::new();
        let color = Color::from_rgb8(10, 20, 30);
        scene.push_line(Line3D::new(
            Point3D::new(0.0, 0.0, 10.0),
            Point3D::new(0.0, 1.0, 10.0),
            color,
        ));
        scene.push_line(Line3D::new(
            Point3D::new(0.0, 0.0, -10.0),
            Point3D::new(0.0, 1.0, -10.0),
            color,
        ));
        scene.set_camera(CameraTransform::default());

        let viewport = Viewport::default();
        let mut surface = RecordingSurface::new();
        assert_eq!(render_wireframe(&scene, &viewport, &mut surface), 1);

        let (op, state) = surface.draws().next().unwrap();
        assert!(matches!(op, DrawOp::StrokeLine(_)));
        assert_eq!(state.paint, color);
        assert_eq!(state.transform, viewport.world_to_view());
    }

    #[test]
    fn camera_box_is_visible_from_home() {
        let mut scene = WireScene::new();
        scene.push_box(
            Point3D::new(-2.0, 0.0, -2.0),
            Point3D::new(2.0, 4.0, 2.0),
            Color::WHITE,
        );
        let mut camera = VirtualCamera::default();
        camera.toggle_movement_enabled();
        camera.update_scene(&mut scene);

        let mut surface = RecordingSurface::new();
        assert_eq!(render_wireframe(&scene, &Viewport::default(), &mut surface), 12);
    }
}
