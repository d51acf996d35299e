// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use tether_gesture::{
    DragTargets, PointerEvent, PointerFilter, PointerKind, PointerPhase, PressRecognizer,
    SwipeConfig, SwipeDismiss, TimerId, Timers,
};
use tether_geometry::ParentLookup;

/// Timers that are never delivered; the bench only measures the state machine.
#[derive(Default)]
struct NullTimers(u64);

impl Timers for NullTimers {
    fn start_timer(&mut self, _after: Duration) -> TimerId {
        self.0 += 1;
        TimerId(self.0)
    }
    fn cancel_timer(&mut self, _id: TimerId) {}
}

struct Handle;

impl ParentLookup<u32> for Handle {
    fn parent_of(&self, node: &u32) -> Option<u32> {
        (*node > 1).then(|| node - 1)
    }
}

impl DragTargets<u32> for Handle {
    fn is_interactive(&self, _element: &u32) -> bool {
        false
    }
}

fn gen_press(moves: usize, step: f64) -> Vec<PointerEvent> {
    let ms = Duration::from_millis;
    let mut out = Vec::with_capacity(moves + 2);
    out.push(PointerEvent::new(PointerPhase::Down, PointerKind::Touch, (100.0, 100.0), ms(0)));
    for i in 0..moves {
        let d = step * (i + 1) as f64;
        out.push(PointerEvent::new(
            PointerPhase::Move,
            PointerKind::Touch,
            (100.0 + d, 100.0),
            ms(i as u64 + 1),
        ));
    }
    out.push(PointerEvent::new(
        PointerPhase::Up,
        PointerKind::Touch,
        (100.0, 100.0),
        ms(moves as u64 + 2),
    ));
    out
}

fn bench_press(c: &mut Criterion) {
    let mut group = c.benchmark_group("press_recognizer");
    for (name, step) in [("in_place", 0.0), ("jitter", 0.05), ("scroll", 2.0)] {
        let events = gen_press(64, step);
        group.throughput(Throughput::Elements(events.len() as u64));
        group.bench_function(name, |b| {
            let mut timers = NullTimers::default();
            let mut filter = PointerFilter::default();
            let mut press = PressRecognizer::default();
            b.iter(|| {
                for ev in &events {
                    if filter.accept(ev) {
                        black_box(press.handle(&mut timers, ev));
                    }
                }
            });
        });
    }
    group.finish();
}

fn bench_swipe(c: &mut Criterion) {
    let mut group = c.benchmark_group("swipe_dismiss");
    let moves = 120;
    group.throughput(Throughput::Elements(moves as u64));
    group.bench_function("drag_release", |b| {
        let mut swipe = SwipeDismiss::new(1, SwipeConfig::default());
        b.iter(|| {
            swipe.press(&Handle, Some(8), 300.0);
            for i in 0..moves {
                let y = 300.0 + i as f64;
                swipe.drag_to(y);
                black_box((swipe.transform(), swipe.backdrop_opacity()));
            }
            black_box(swipe.release());
        });
    });
    group.finish();
}

criterion_group!(benches, bench_press, bench_swipe);
criterion_main!(benches);
