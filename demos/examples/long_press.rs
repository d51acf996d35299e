// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Long press.
//!
//! Replay three touch sequences through the pointer filter and a press recognizer: a tap, a
//! hold, and a press that turns into a scroll.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p tether_demos --example long_press`

use std::time::Duration;

use tether_demos::ToyClock;
use tether_gesture::{PointerEvent, PointerFilter, PointerKind, PointerPhase, PressRecognizer};

fn touch(phase: PointerPhase, x: f64, y: f64, at_ms: u64) -> PointerEvent {
    PointerEvent::new(phase, PointerKind::Touch, (x, y), Duration::from_millis(at_ms))
}

fn replay(name: &str, events: &[PointerEvent]) {
    let mut clock = ToyClock::default();
    let mut filter = PointerFilter::default();
    let mut press = PressRecognizer::default();
    let mut gestures = Vec::new();

    for ev in events {
        for timer in clock.advance(ev.timestamp) {
            gestures.extend(press.timer_fired(timer));
        }
        if filter.accept(ev) {
            gestures.extend(press.handle(&mut clock, ev));
        }
    }
    println!("{name}: {gestures:?}");
}

fn main() {
    env_logger::init();

    replay(
        "tap",
        &[
            touch(PointerPhase::Down, 100.0, 100.0, 0),
            touch(PointerPhase::Up, 100.0, 100.0, 120),
            // Compatibility mouse events for the same tap.
            PointerEvent::from_mouse(PointerPhase::Down, 100.0, 100.0, Duration::from_millis(130)),
            PointerEvent::from_mouse(PointerPhase::Up, 100.0, 100.0, Duration::from_millis(131)),
        ],
    );
    replay(
        "hold",
        &[
            touch(PointerPhase::Down, 100.0, 100.0, 0),
            touch(PointerPhase::Up, 100.0, 100.0, 600),
        ],
    );
    replay(
        "scroll",
        &[
            touch(PointerPhase::Down, 100.0, 100.0, 0),
            touch(PointerPhase::Move, 115.0, 100.0, 200),
            touch(PointerPhase::Up, 115.0, 100.0, 600),
        ],
    );
}
