// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Insets, Rect, Size};
use understory_placement::{
    Align, AlignAvoidance, ArrowOptions, CollisionAvoidance, FallbackAxis, PlacementRequest, Side,
    compute_placement,
};

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1280.0, 720.0);

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Anchors scattered over the viewport, many of them near edges.
fn gen_anchors(count: usize) -> Vec<Rect> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| {
            let x0 = rng.next_f64() * (VIEWPORT.width() - 80.0);
            let y0 = rng.next_f64() * (VIEWPORT.height() - 24.0);
            Rect::new(x0, y0, x0 + 80.0, y0 + 24.0)
        })
        .collect()
}

fn bench_fits(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement");
    let anchors = gen_anchors(1024);
    group.throughput(Throughput::Elements(anchors.len() as u64));

    let request = PlacementRequest {
        side_offset: 8.0,
        collision_boundary: VIEWPORT,
        ..Default::default()
    };
    group.bench_function("tooltip_random_anchors", |b| {
        b.iter(|| {
            for &anchor in &anchors {
                black_box(compute_placement(anchor, Size::new(160.0, 40.0), &request));
            }
        });
    });

    let request = PlacementRequest {
        side: Side::Right,
        align: Align::Start,
        side_offset: 4.0,
        collision_boundary: VIEWPORT,
        collision_padding: Insets::uniform(8.0),
        arrow: Some(ArrowOptions::default()),
        ..Default::default()
    };
    group.bench_function("submenu_with_arrow", |b| {
        b.iter(|| {
            for &anchor in &anchors {
                black_box(compute_placement(anchor, Size::new(240.0, 320.0), &request));
            }
        });
    });
    group.finish();
}

fn bench_overflow(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement_overflow");
    let anchors = gen_anchors(1024);
    group.throughput(Throughput::Elements(anchors.len() as u64));

    // Nothing fits: every candidate gets scored.
    let request = PlacementRequest {
        collision_boundary: VIEWPORT,
        collision_avoidance: CollisionAvoidance {
            align: AlignAvoidance::Flip,
            fallback_axis: FallbackAxis::End,
            ..Default::default()
        },
        ..Default::default()
    };
    group.bench_function("oversized_popup_all_candidates", |b| {
        b.iter(|| {
            for &anchor in &anchors {
                black_box(compute_placement(anchor, Size::new(900.0, 600.0), &request));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_fits, bench_overflow);
criterion_main!(benches);
