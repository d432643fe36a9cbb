// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A modal menu with a hover submenu, dismissed by outside presses and Escape.
//!
//! Run:
//! - `RUST_LOG=understory_floating=debug cargo run -p understory_demos --example menu_dismissal`

use kurbo::{Point, Rect, Size};
use tracing_subscriber::EnvFilter;
use understory_floating::{Engine, FloatingOptions, HoverTarget, Result};

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut engine = Engine::default();
    let menu = engine.insert(FloatingOptions {
        modal: true,
        open_on_hover: false,
        ..Default::default()
    })?;
    let submenu = engine.insert(FloatingOptions {
        parent: Some(menu),
        delay_ms: 100,
        ..Default::default()
    })?;

    engine.trigger_press(menu, 0)?;
    engine.layout(
        menu,
        Rect::new(40.0, 20.0, 120.0, 44.0),
        Size::new(160.0, 200.0),
        Some(VIEWPORT),
    )?;
    let backdrop = engine.snapshot(menu)?.backdrop;
    println!("menu open, backdrop: {backdrop:?}");

    engine.pointer_over(Some(HoverTarget::popup(menu)), 50)?;
    engine.pointer_over(Some(HoverTarget::trigger(submenu)), 60)?;
    engine.advance(160);
    engine.layout(
        submenu,
        Rect::new(40.0, 80.0, 200.0, 104.0),
        Size::new(160.0, 120.0),
        Some(VIEWPORT),
    )?;
    let layers = (engine.snapshot(menu)?.layer, engine.snapshot(submenu)?.layer);
    println!("submenu open, layers: {layers:?}");
    assert!(engine.is_open(submenu)?);

    let closed = engine.pointer_down(Point::new(700.0, 500.0), 300)?;
    println!("outside press closed {closed:?}");
    assert_eq!(closed, vec![submenu]);
    assert!(engine.is_open(menu)?);

    let closed = engine.escape(400)?;
    println!("escape closed {closed:?}");
    assert_eq!(closed, Some(menu));
    assert_eq!(engine.top(), None);
    Ok(())
}
