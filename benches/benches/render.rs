// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use easel_camera::{Line3D, VirtualCamera, WireScene};
use easel_editor::ShapeList;
use easel_imaging::{DrawOp, StateOp, Surface};
use easel_render::{BasicFactory, BasicShape, RenderPipeline, render_wireframe};
use easel_vector::Point3D;
use easel_view2d::Viewport;
use kurbo::{Point, Vec2};
use peniko::Color;

/// Surface that only counts what it receives.
#[derive(Default)]
struct CountingSurface {
    states: usize,
    draws: usize,
}

impl Surface for CountingSurface {
    fn state(&mut self, op: StateOp) {
        black_box(op);
        self.states += 1;
    }

    fn draw(&mut self, op: DrawOp) {
        black_box(op);
        self.draws += 1;
    }
}

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }

    fn point(&mut self, extent: f64) -> Point {
        Point::new(self.next_f64() * extent, self.next_f64() * extent)
    }
}

fn build_drawing(n: usize, seed: u64) -> ShapeList<BasicShape> {
    let mut rng = Lcg(seed);
    let color = Color::from_rgb8(40, 120, 200);
    let mut list: ShapeList<BasicShape> = (0..n)
        .map(|i| {
            let p = rng.point(2048.0);
            let q = rng.point(2048.0);
            match i % 4 {
                0 => BasicShape::line(p, q, color),
                1 => BasicShape::rectangle(p, q, color),
                2 => BasicShape::ellipse(p, Vec2::new(20.0, 10.0), color),
                _ => BasicShape::triangle(p, q, rng.point(2048.0), color),
            }
        })
        .collect();
    list.select(Some(n / 2));
    list
}

fn build_scene(boxes: usize) -> WireScene {
    let mut scene = WireScene::new();
    for i in 0..boxes {
        let x = (i % 16) as f64 * 3.0 - 24.0;
        let z = (i / 16) as f64 * 3.0;
        scene.push_box(
            Point3D::new(x, 0.0, z),
            Point3D::new(x + 2.0, 2.0, z + 2.0),
            Color::WHITE,
        );
    }
    scene.push_line(Line3D::new(
        Point3D::new(-100.0, 0.0, 0.0),
        Point3D::new(100.0, 0.0, 0.0),
        Color::WHITE,
    ));
    let mut camera = VirtualCamera::default();
    camera.toggle_movement_enabled();
    camera.update_scene(&mut scene);
    scene
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("easel_render/shapes");
    let viewport = Viewport::default();

    for n in [64_usize, 512, 4_096] {
        let drawing = build_drawing(n, 0xEA5E_0000_0000_0001);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &drawing, |b, drawing| {
            b.iter(|| {
                let mut surface = CountingSurface::default();
                let stats =
                    RenderPipeline::render(drawing, &BasicFactory, &viewport, &mut surface);
                black_box((stats, surface.states, surface.draws));
            });
        });
    }

    group.finish();
}

fn bench_wireframe(c: &mut Criterion) {
    let mut group = c.benchmark_group("easel_render/wireframe");
    let viewport = Viewport::default();

    for boxes in [16_usize, 256] {
        let scene = build_scene(boxes);
        group.throughput(Throughput::Elements(scene.lines().len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(boxes), &scene, |b, scene| {
            b.iter(|| {
                let mut surface = CountingSurface::default();
                black_box(render_wireframe(scene, &viewport, &mut surface));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render, bench_wireframe);
criterion_main!(benches);
