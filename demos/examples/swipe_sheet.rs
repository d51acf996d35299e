// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe sheet.
//!
//! Drag a bottom sheet by its handle: a short drag snaps back, a long one dismisses, and a
//! press on the close button inside the handle never starts a drag.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p tether_demos --example swipe_sheet`

use kurbo::{Point, Rect};
use tether_demos::ToyPage;
use tether_gesture::{SwipeConfig, SwipeDismiss};

const SHEET: u32 = 1;
const HANDLE: u32 = 2;
const CLOSE: u32 = 3;

fn drag(page: &ToyPage, swipe: &mut SwipeDismiss<u32>, target: u32, from: f64, to: f64) {
    if !swipe.press(page, Some(target), from) {
        println!("press on {target}: no drag");
        return;
    }
    let mut y = from;
    while y < to {
        y = (y + 30.0).min(to);
        swipe.drag_to(y);
        let origin = swipe.transform() * Point::ZERO;
        println!(
            "  offset {:>5.1}  sheet y {:>5.1}  backdrop {:.2}",
            swipe.offset(),
            origin.y,
            swipe.backdrop_opacity()
        );
    }
    println!("release: {:?}", swipe.release());
}

fn main() {
    env_logger::init();

    let mut page = ToyPage::new(390.0, 844.0);
    page.mount(SHEET, None, Rect::new(0.0, 300.0, 390.0, 844.0));
    page.mount(HANDLE, Some(SHEET), Rect::new(0.0, 300.0, 390.0, 340.0));
    page.mount(CLOSE, Some(HANDLE), Rect::new(340.0, 305.0, 385.0, 335.0))
        .interactive = true;

    let mut swipe = SwipeDismiss::new(HANDLE, SwipeConfig::default());
    drag(&page, &mut swipe, HANDLE, 300.0, 360.0);
    drag(&page, &mut swipe, HANDLE, 300.0, 420.0);
    drag(&page, &mut swipe, CLOSE, 310.0, 500.0);
}
