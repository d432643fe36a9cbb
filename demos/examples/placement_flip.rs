// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement near viewport edges: flip, shift, and the arrow offset.
//!
//! Run:
//! - `cargo run -p understory_demos --example placement_flip`

use kurbo::{Rect, Size};
use understory_placement::{ArrowOptions, PlacementRequest, Side, compute_placement};

fn main() {
    let viewport = Rect::new(0.0, 0.0, 400.0, 300.0);
    let request = PlacementRequest {
        side: Side::Bottom,
        side_offset: 8.0,
        collision_boundary: viewport,
        arrow: Some(ArrowOptions::default()),
        ..Default::default()
    };
    let popup = Size::new(120.0, 80.0);

    let roomy = compute_placement(Rect::new(140.0, 40.0, 200.0, 64.0), popup, &request);
    println!("== Room below ==\n  {roomy:?}");
    assert_eq!(roomy.side, Side::Bottom);

    let low = compute_placement(Rect::new(140.0, 250.0, 200.0, 274.0), popup, &request);
    println!("== Near the bottom edge ==\n  {low:?}");
    assert_eq!(low.side, Side::Top);
    assert_eq!(low.y + popup.height, 250.0 - 8.0);

    let corner = compute_placement(Rect::new(360.0, 40.0, 390.0, 64.0), popup, &request);
    println!("== Near the right edge ==\n  {corner:?}");
    assert!(corner.x + popup.width <= 400.0 - 5.0);
    let arrow = corner.arrow.and_then(|a| a.x);
    println!("  arrow x inside popup: {arrow:?}");

    let hidden = compute_placement(Rect::new(500.0, 40.0, 540.0, 64.0), popup, &request);
    println!("== Anchor scrolled out ==\n  anchor_hidden={}", hidden.anchor_hidden);
    assert!(hidden.anchor_hidden);
}
