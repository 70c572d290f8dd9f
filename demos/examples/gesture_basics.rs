// Copyright 2025 the Baize Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recognizer basics.
//!
//! Drives three single-point episodes through the recognizer: a quick tap, a
//! held press (resolved via the host-timer token), and a drag that crosses
//! the move threshold, printing every emission.
//!
//! Run:
//! - `cargo run -p baize_demos --example gesture_basics`

use baize_gestures::recognizer::Recognizer;
use baize_gestures::types::{GestureConfig, Modifiers, PointerButton, RawInput};
use kurbo::Point;

fn feed(rec: &mut Recognizer, label: &str, events: &[RawInput]) {
    println!("== {label} ==");
    for ev in events {
        for emission in rec.handle(ev) {
            println!("  {emission:?}");
        }
        // A real host would schedule a timer here; the press episode below
        // fires it by hand instead.
        if let Some(timer) = rec.pending_press() {
            println!("  (press timer pending at {} ms)", timer.deadline_ms);
        }
    }
}

fn main() {
    let mut rec = Recognizer::new(GestureConfig::default());

    feed(
        &mut rec,
        "tap",
        &[
            RawInput::ButtonDown {
                button: PointerButton::Primary,
                modifiers: Modifiers::empty(),
                position: Point::new(10.0, 10.0),
                time_ms: 0,
            },
            RawInput::ButtonUp {
                position: Point::new(10.0, 10.0),
                time_ms: 80,
            },
        ],
    );

    println!("== press ==");
    for emission in rec.handle(&RawInput::ButtonDown {
        button: PointerButton::Primary,
        modifiers: Modifiers::empty(),
        position: Point::new(40.0, 25.0),
        time_ms: 1000,
    }) {
        println!("  {emission:?}");
    }
    let timer = rec.pending_press().expect("tapping arms the press timer");
    println!("  (firing press timer at {} ms)", timer.deadline_ms);
    for emission in rec.press_timeout(timer.token) {
        println!("  {emission:?}");
    }
    for emission in rec.handle(&RawInput::ButtonUp {
        position: Point::new(40.0, 25.0),
        time_ms: timer.deadline_ms + 200,
    }) {
        println!("  {emission:?}");
    }

    feed(
        &mut rec,
        "pan",
        &[
            RawInput::ButtonDown {
                button: PointerButton::Primary,
                modifiers: Modifiers::empty(),
                position: Point::new(10.0, 10.0),
                time_ms: 3000,
            },
            RawInput::PointerMove {
                position: Point::new(15.0, 10.0),
                time_ms: 3030,
            },
            RawInput::PointerMove {
                position: Point::new(10.0, 20.0),
                time_ms: 3060,
            },
            RawInput::ButtonUp {
                position: Point::new(10.0, 20.0),
                time_ms: 3090,
            },
        ],
    );
}
