// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A toolbar of tooltips sharing a delay group.
//!
//! The first tooltip waits for its hover delay. Moving to a neighbor while the
//! first is open switches instantly, and after a pause the delay applies again.
//!
//! Run:
//! - `RUST_LOG=understory_floating=debug cargo run -p understory_demos --example tooltip_hover`

use kurbo::{Rect, Size};
use tracing_subscriber::EnvFilter;
use understory_floating::{
    DelayGroupOptions, Engine, FloatingId, FloatingOptions, HoverTarget, InstantType,
    NoTransitions, Result,
};

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 640.0, 480.0);

fn report(engine: &Engine, label: &str, ids: &[FloatingId]) -> Result<()> {
    println!("== {label} ==");
    for (i, &id) in ids.iter().enumerate() {
        let s = engine.snapshot(id)?;
        println!(
            "  button {i}: open={} phase={:?} instant={:?} at=({}, {})",
            s.open, s.phase, s.instant, s.x, s.y
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut engine = Engine::default();
    let group = engine.create_group(DelayGroupOptions::default());
    let mut buttons = Vec::new();
    for i in 0..3_u8 {
        let id = engine.insert(FloatingOptions {
            group: Some(group),
            delay_ms: 500,
            ..Default::default()
        })?;
        let x = 20.0 + f64::from(i) * 60.0;
        engine.layout(
            id,
            Rect::new(x, 10.0, x + 48.0, 42.0),
            Size::new(120.0, 28.0),
            Some(VIEWPORT),
        )?;
        buttons.push(id);
    }

    engine.pointer_over(Some(HoverTarget::trigger(buttons[0])), 0)?;
    engine.frame(250, &NoTransitions);
    report(&engine, "t=250, still waiting", &buttons)?;
    assert!(!engine.is_open(buttons[0])?);

    for now in [500, 516, 532, 548] {
        engine.frame(now, &NoTransitions);
    }
    report(&engine, "t=548, first tooltip open", &buttons)?;
    assert!(engine.is_open(buttons[0])?);

    engine.pointer_over(Some(HoverTarget::trigger(buttons[1])), 600)?;
    report(&engine, "t=600, moved to the neighbor", &buttons)?;
    assert!(engine.is_open(buttons[1])?);
    assert_eq!(
        engine.snapshot(buttons[1])?.instant,
        Some(InstantType::Delay)
    );

    engine.pointer_over(None, 700)?;
    engine.pointer_over(Some(HoverTarget::trigger(buttons[2])), 1500)?;
    engine.frame(1600, &NoTransitions);
    report(&engine, "t=1600, after a pause", &buttons)?;
    assert!(!engine.is_open(buttons[2])?);
    println!("next deadline: {:?}", engine.next_deadline());
    Ok(())
}
