// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use tether_geometry::{Align, ParentLookup, Placement, PositionConfig, Side, compute_position};
use tether_overlay::{
    FrameRequest, Host, ListenerId, OverlayConfig, OverlaySession, Signals, Source,
};

const VIEWPORT: Size = Size::new(1280.0, 800.0);

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

fn gen_triggers(count: usize) -> Vec<Rect> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| {
            let w = 40.0 + rng.next_f64() * 200.0;
            let h = 24.0 + rng.next_f64() * 24.0;
            let x = rng.next_f64() * (VIEWPORT.width - w);
            let y = rng.next_f64() * (VIEWPORT.height - h);
            Rect::from_origin_size((x, y), (w, h))
        })
        .collect()
}

fn bench_compute_position(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_position");
    let triggers = gen_triggers(1024);
    group.throughput(Throughput::Elements(triggers.len() as u64));
    let config = PositionConfig::default();
    for (name, side, align) in [
        ("bottom_start", Side::Bottom, Align::Start),
        ("bottom_end", Side::Bottom, Align::End),
        ("top_center", Side::Top, Align::Center),
    ] {
        let placement = Placement {
            side,
            align,
            offset: 8.0,
        };
        group.bench_function(format!("measured_{name}"), |b| {
            b.iter(|| {
                for t in &triggers {
                    black_box(compute_position(
                        *t,
                        VIEWPORT,
                        &placement,
                        Some(Size::new(180.0, 220.0)),
                        &config,
                    ));
                }
            });
        });
    }
    group.bench_function("estimated", |b| {
        let placement = Placement::default();
        b.iter(|| {
            for t in &triggers {
                black_box(compute_position(*t, VIEWPORT, &placement, None, &config));
            }
        });
    });
    group.finish();
}

/// Minimal host: a trigger (1) and a panel (2), no hierarchy.
#[derive(Default)]
struct BenchHost {
    next: u64,
    frames: Vec<FrameRequest>,
    trigger: Rect,
}

impl ParentLookup<u32> for BenchHost {
    fn parent_of(&self, _node: &u32) -> Option<u32> {
        None
    }
}

impl Host<u32> for BenchHost {
    fn viewport(&self) -> Size {
        VIEWPORT
    }
    fn rect_of(&self, element: &u32) -> Option<Rect> {
        match element {
            1 => Some(self.trigger),
            2 => Some(Rect::new(0.0, 0.0, 180.0, 220.0)),
            _ => None,
        }
    }
    fn listen(&mut self, _source: Source<u32>) -> ListenerId {
        self.next += 1;
        ListenerId(self.next)
    }
    fn unlisten(&mut self, _id: ListenerId) {}
    fn request_frame(&mut self) -> FrameRequest {
        self.next += 1;
        let req = FrameRequest(self.next);
        self.frames.push(req);
        req
    }
    fn cancel_frame(&mut self, request: FrameRequest) {
        self.frames.retain(|f| *f != request);
    }
}

// A scroll storm: many signals per frame, one flush each.
fn bench_session_relayout(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_relayout");
    for &per_frame in &[1usize, 16, 128] {
        group.throughput(Throughput::Elements(per_frame as u64));
        group.bench_function(format!("signals_per_frame_{per_frame}"), |b| {
            b.iter_batched(
                || {
                    let mut host = BenchHost {
                        trigger: Rect::from_origin_size((400.0, 300.0), (120.0, 40.0)),
                        ..Default::default()
                    };
                    let mut session: OverlaySession<u32> =
                        OverlaySession::new(Placement::default(), OverlayConfig::default());
                    session.open(&mut host, 1);
                    session.set_panel(&mut host, Some(2));
                    for f in core::mem::take(&mut host.frames) {
                        session.frame(&mut host, f);
                    }
                    (host, session)
                },
                |(mut host, mut session)| {
                    for i in 0..per_frame {
                        host.trigger = host.trigger.with_origin((400.0, 300.0 - i as f64));
                        session.layout_changed(&mut host, Signals::SCROLL);
                    }
                    for f in core::mem::take(&mut host.frames) {
                        black_box(session.frame(&mut host, f));
                    }
                    session.close(&mut host);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compute_position, bench_session_relayout);
criterion_main!(benches);
