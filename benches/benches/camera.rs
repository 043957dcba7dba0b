// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use easel_camera::{CameraKey, VirtualCamera, WireScene};
use easel_vector::{Matrix4, Vector3H};
use easel_view2d::Viewport;

const WALK: [CameraKey; 8] = [
    CameraKey::Forward,
    CameraKey::Forward,
    CameraKey::TurnRight,
    CameraKey::Forward,
    CameraKey::Up,
    CameraKey::Left,
    CameraKey::TurnLeft,
    CameraKey::Back,
];

fn bench_camera(c: &mut Criterion) {
    let mut group = c.benchmark_group("easel_camera");

    group.bench_function("update_scene(8 keys)", |b| {
        b.iter_batched(
            || {
                let mut camera = VirtualCamera::default();
                camera.toggle_movement_enabled();
                for key in WALK {
                    camera.queue_key(key);
                }
                (camera, WireScene::new())
            },
            |(mut camera, mut scene)| {
                camera.update_scene(&mut scene);
                black_box(scene);
            },
            BatchSize::SmallInput,
        );
    });

    let camera = VirtualCamera::default();
    let m: Matrix4 = camera.transform().world_to_clip();
    let v = Vector3H::new(1.0, 2.0, 3.0);
    group.bench_function("world_to_clip * point", |b| {
        b.iter(|| black_box(black_box(m) * black_box(v)));
    });

    group.finish();
}

fn bench_viewport(c: &mut Criterion) {
    let mut group = c.benchmark_group("easel_view2d");

    group.bench_function("zoom_in_out_cycle", |b| {
        b.iter_batched(
            Viewport::default,
            |mut viewport| {
                while viewport.zoom_in().is_some() {}
                while viewport.zoom_out().is_some() {}
                black_box(viewport);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_camera, bench_viewport);
criterion_main!(benches);
