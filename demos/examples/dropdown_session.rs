// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dropdown session.
//!
//! Open a dropdown near the bottom-right corner, let the panel paint, shrink its content, strip
//! a role injected by a nested widget, and dismiss it with an outside press.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p tether_demos --example dropdown_session`

use kurbo::Rect;
use tether_demos::ToyPage;
use tether_geometry::{Align, Placement, Side, rect_from_bounds};
use tether_overlay::{OverlayConfig, OverlaySession, RoleCleanup, Signals};

const DOC: u32 = 1;
const TRIGGER: u32 = 2;
const PANEL: u32 = 3;
const SLIDER: u32 = 4;
const OUTSIDE: u32 = 5;

fn flush(page: &mut ToyPage, session: &mut OverlaySession<u32>, cleanup: &RoleCleanup) {
    for f in page.take_frames() {
        if let Some(flush) = session.frame_with_cleanup(page, f, cleanup) {
            println!("  frame -> {:?} (mutated: {})", flush.position, flush.panel_mutated);
        }
    }
}

fn main() {
    env_logger::init();

    let mut page = ToyPage::new(1024.0, 768.0);
    page.mount(DOC, None, Rect::new(0.0, 0.0, 1024.0, 768.0));
    page.mount(TRIGGER, Some(DOC), rect_from_bounds(780.0, 900.0, 120.0, 44.0));
    page.mount(OUTSIDE, Some(DOC), rect_from_bounds(20.0, 20.0, 100.0, 40.0));

    let placement = Placement {
        side: Side::Bottom,
        align: Align::End,
        offset: 8.0,
    };
    let mut session = OverlaySession::new(placement, OverlayConfig::default());
    let cleanup = RoleCleanup::default();

    let first = session.open(&mut page, TRIGGER);
    println!("open (estimated size): {first:?}");

    // The panel paints at 160×200 with a slider that injected role="group".
    page.mount(PANEL, Some(DOC), rect_from_bounds(0.0, 0.0, 160.0, 200.0));
    page.mount(SLIDER, Some(PANEL), rect_from_bounds(0.0, 0.0, 160.0, 40.0))
        .role = Some("group".into());
    session.set_panel(&mut page, Some(PANEL));
    flush(&mut page, &mut session, &cleanup);
    println!("listening on {} sources", page.listeners().count());

    // A filter shrinks the list; only the mutation observer notices.
    page.set_rect(PANEL, rect_from_bounds(0.0, 0.0, 160.0, 80.0));
    session.layout_changed(&mut page, Signals::PANEL_MUTATION | Signals::PANEL_SIZE);
    flush(&mut page, &mut session, &cleanup);
    println!("slider role after cleanup: {:?}", page.elements[&SLIDER].role);

    // Presses inside keep it open; outside dismisses.
    assert!(session.pointer_down(&mut page, Some(SLIDER)).is_none());
    let dismissed = session.pointer_down(&mut page, Some(OUTSIDE));
    println!("outside press: {dismissed:?}, open: {}", session.is_open());
    assert_eq!(page.listeners().count(), 0, "a closed session holds no listeners");
}
