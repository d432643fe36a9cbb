// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};
use understory_floating::{
    DelayGroupOptions, Engine, FloatingId, FloatingOptions, HoverTarget, NoTransitions,
};

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1280.0, 720.0);

/// A toolbar of grouped tooltips.
fn toolbar(n: usize) -> (Engine, Vec<FloatingId>) {
    let mut engine = Engine::default();
    let group = engine.create_group(DelayGroupOptions::default());
    let ids = (0..n)
        .map(|_| {
            engine
                .insert(FloatingOptions {
                    group: Some(group),
                    ..Default::default()
                })
                .unwrap()
        })
        .collect();
    (engine, ids)
}

/// A menu with `depth` nested submenus, all open.
fn menu_chain(depth: usize) -> (Engine, Vec<FloatingId>) {
    let mut engine = Engine::default();
    let mut ids: Vec<FloatingId> = Vec::with_capacity(depth);
    for i in 0..depth {
        let id = engine
            .insert(FloatingOptions {
                parent: ids.last().copied(),
                ..Default::default()
            })
            .unwrap();
        engine.trigger_press(id, i as u64).unwrap();
        let x = 20.0 + i as f64 * 150.0;
        engine
            .layout(
                id,
                Rect::new(x, 20.0, x + 140.0, 44.0),
                Size::new(140.0, 200.0),
                Some(VIEWPORT),
            )
            .unwrap();
        ids.push(id);
    }
    (engine, ids)
}

fn bench_hover_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");
    for &n in &[16usize, 64] {
        group.bench_function(format!("hover_sweep_toolbar_n{}", n), |b| {
            b.iter_batched(
                || toolbar(n),
                |(mut engine, ids)| {
                    let mut now = 0;
                    for &id in &ids {
                        engine.pointer_over(Some(HoverTarget::trigger(id)), now).unwrap();
                        now += 50;
                        engine.advance(now);
                        engine.frame(now, &NoTransitions);
                    }
                    black_box(engine.next_deadline());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_dismissal(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");
    for &depth in &[4usize, 16] {
        group.bench_function(format!("outside_press_menu_depth{}", depth), |b| {
            b.iter_batched(
                || menu_chain(depth),
                |(mut engine, _ids)| {
                    let closed = engine
                        .pointer_down(Point::new(1200.0, 700.0), 10_000)
                        .unwrap();
                    black_box(closed);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hover_sweep, bench_dismissal);
criterion_main!(benches);
