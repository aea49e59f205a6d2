// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use understory_drawer::{
    DragMode, Drawer, DrawerConfig, DrawerInfo, DrawerTransformer, DrawerType, Position,
};

const BOUNDS: Size = Size::new(1080.0, 1920.0);

/// Transformer that only counts, so callback dispatch is part of the measurement.
struct Counter(u64);

impl DrawerTransformer<u32> for Counter {
    fn on_view_created(&mut self, _: &DrawerInfo, _: &u32) {}

    fn on_swiping(&mut self, _: &DrawerInfo, _: f64, offset_px: i32) {
        self.0 = self.0.wrapping_add(offset_px.unsigned_abs().into());
    }

    fn on_completed(&mut self, _: &DrawerInfo) {
        self.0 += 1;
    }

    fn on_reset(&mut self, _: &DrawerInfo) {
        self.0 += 1;
    }
}

fn drawer(drawer_type: DrawerType) -> Drawer<u32> {
    let config = DrawerConfig::default()
        .with_menu_size(300.0)
        .with_position(Position::Left)
        .with_drag_mode(DragMode::Content)
        .with_drawer_type(drawer_type);
    let mut drawer = Drawer::new(config).expect("valid config");
    drawer.set_transformer(Some(Box::new(Counter(0))));
    drawer.layout(BOUNDS);
    drawer
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("drawer/drag");

    // One drag across the whole menu, sampled at different pointer densities.
    for steps in [16_u32, 128, 1_024] {
        group.bench_with_input(BenchmarkId::new("moves", steps), &steps, |b, &steps| {
            b.iter_batched(
                || drawer(DrawerType::Behind),
                |mut drawer| {
                    drawer.on_pointer_down(Point::new(0.0, 500.0), &[1, 2, 3], 0);
                    for i in 1..=steps {
                        let x = 300.0 * f64::from(i) / f64::from(steps);
                        drawer.on_pointer_move(Point::new(x, 500.0), u64::from(i));
                    }
                    drawer.on_pointer_up(Point::new(300.0, 500.0), u64::from(steps) + 1);
                    black_box(drawer);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_animation(c: &mut Criterion) {
    let mut group = c.benchmark_group("drawer/animation");

    for drawer_type in [DrawerType::Behind, DrawerType::Overlay] {
        group.bench_function(BenchmarkId::new("open_close", format!("{drawer_type:?}")), |b| {
            b.iter_batched(
                || drawer(drawer_type),
                |mut drawer| {
                    drawer.open(true, 0);
                    let mut now = 0;
                    while drawer.on_frame(now).is_some() {
                        now += 16;
                    }
                    drawer.close(true, now);
                    while drawer.on_frame(now).is_some() {
                        now += 16;
                    }
                    black_box(drawer);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_drag, bench_animation);
criterion_main!(benches);
