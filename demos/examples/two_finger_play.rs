// Copyright 2025 the Baize Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-finger disambiguation in motion.
//!
//! Feeds one continuous two-finger episode whose frames alternate between
//! parallel translation, separation along the finger axis, and tangential
//! twisting, showing the per-frame rotate/zoom re-interpretation.
//!
//! Run:
//! - `cargo run -p baize_demos --example two_finger_play`

use baize_gestures::dispatch::{GestureHandler, dispatch};
use baize_gestures::recognizer::Recognizer;
use baize_gestures::types::{GestureConfig, RawInput};
use kurbo::{Point, Vec2};

/// A stand-in camera controller that just narrates the deltas it receives.
struct Narrator;

impl GestureHandler for Narrator {
    fn gesture_start(&mut self, position: Point) {
        println!("gesture start at {position:?}");
    }
    fn gesture_end(&mut self) {
        println!("gesture end");
    }
    fn zoom(&mut self, delta: Vec2, _position: Point, _anchor: Point) {
        println!("  zoom    {:+.2}", delta.y);
    }
    fn rotate(&mut self, delta: Vec2, _position: Point, _anchor: Point) {
        if delta.x != 0.0 {
            println!("  twist   {:+.2}", delta.x);
        } else {
            println!("  tilt    {:+.2}", delta.y);
        }
    }
}

fn pair(a: (f64, f64), b: (f64, f64)) -> Vec<Point> {
    vec![Point::new(a.0, a.1), Point::new(b.0, b.1)]
}

fn main() {
    let mut rec = Recognizer::new(GestureConfig::default());
    let mut camera = Narrator;

    let frames = [
        RawInput::TouchStart {
            touches: pair((100.0, 100.0), (200.0, 200.0)),
            time_ms: 0,
        },
        // Parallel translation: tilt.
        RawInput::TouchMove {
            touches: pair((120.0, 110.0), (220.0, 210.0)),
            time_ms: 16,
        },
        // Separating along the finger axis: zoom in.
        RawInput::TouchMove {
            touches: pair((100.0, 90.0), (240.0, 230.0)),
            time_ms: 32,
        },
        // Pinching back together: zoom out.
        RawInput::TouchMove {
            touches: pair((120.0, 110.0), (220.0, 210.0)),
            time_ms: 48,
        },
        // Orbiting the midpoint: twist.
        RawInput::TouchMove {
            touches: pair((140.0, 90.0), (200.0, 230.0)),
            time_ms: 64,
        },
        RawInput::TouchEnd {
            touches: vec![],
            time_ms: 80,
        },
    ];

    for frame in &frames {
        let emissions = rec.handle(frame);
        dispatch(&mut camera, &emissions);
    }
}
