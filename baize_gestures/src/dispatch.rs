// Copyright 2025 the Baize Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Emission dispatch: forward recognizer output to a host handler.
//!
//! The recognizer returns [`GestureEvent`] batches as values. Hosts that
//! prefer a callback surface implement [`GestureHandler`], overriding only
//! the intents they care about; every method defaults to a no-op, so an
//! unconfigured handler is silently skipped rather than an error.

use kurbo::{Point, Vec2};

use crate::types::GestureEvent;

/// Host-side consumer of semantic gesture intents.
///
/// Typically implemented by a camera or object-manipulation controller. All
/// methods have no-op defaults.
pub trait GestureHandler {
    /// Contact began.
    fn gesture_start(&mut self, _position: Point) {}
    /// Contact count returned to zero.
    fn gesture_end(&mut self) {}
    /// The gesture resolved as a tap.
    fn tap(&mut self, _position: Point) {}
    /// The gesture was promoted to a press.
    fn press(&mut self, _position: Point) {}
    /// A pan delta.
    fn pan(&mut self, _delta: Vec2, _position: Point, _anchor: Point) {}
    /// A zoom delta.
    fn zoom(&mut self, _delta: Vec2, _position: Point, _anchor: Point) {}
    /// A rotate delta.
    fn rotate(&mut self, _delta: Vec2, _position: Point, _anchor: Point) {}
}

/// Deliver an emission batch to `handler`, in order.
pub fn dispatch<H: GestureHandler>(handler: &mut H, events: &[GestureEvent]) {
    for ev in events {
        match *ev {
            GestureEvent::Start { position } => handler.gesture_start(position),
            GestureEvent::End => handler.gesture_end(),
            GestureEvent::Tap { position } => handler.tap(position),
            GestureEvent::Press { position } => handler.press(position),
            GestureEvent::Pan {
                delta,
                position,
                anchor,
            } => handler.pan(delta, position, anchor),
            GestureEvent::Zoom {
                delta,
                position,
                anchor,
            } => handler.zoom(delta, position, anchor),
            GestureEvent::Rotate {
                delta,
                position,
                anchor,
            } => handler.rotate(delta, position, anchor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    #[derive(Default)]
    struct Recording {
        calls: Vec<&'static str>,
        last_pan: Option<Vec2>,
    }

    impl GestureHandler for Recording {
        fn gesture_start(&mut self, _position: Point) {
            self.calls.push("start");
        }
        fn gesture_end(&mut self) {
            self.calls.push("end");
        }
        fn pan(&mut self, delta: Vec2, _position: Point, _anchor: Point) {
            self.calls.push("pan");
            self.last_pan = Some(delta);
        }
    }

    #[test]
    fn events_are_delivered_in_order() {
        let mut handler = Recording::default();
        let events = vec![
            GestureEvent::Start {
                position: Point::new(1.0, 1.0),
            },
            GestureEvent::Pan {
                delta: Vec2::new(3.0, 4.0),
                position: Point::new(4.0, 5.0),
                anchor: Point::new(1.0, 1.0),
            },
            GestureEvent::End,
        ];
        dispatch(&mut handler, &events);
        assert_eq!(handler.calls, vec!["start", "pan", "end"]);
        assert_eq!(handler.last_pan, Some(Vec2::new(3.0, 4.0)));
    }

    // Intents without an override fall through to the no-op defaults.
    #[test]
    fn unhandled_events_are_skipped() {
        let mut handler = Recording::default();
        let events = vec![
            GestureEvent::Tap {
                position: Point::ZERO,
            },
            GestureEvent::Press {
                position: Point::ZERO,
            },
            GestureEvent::Zoom {
                delta: Vec2::ZERO,
                position: Point::ZERO,
                anchor: Point::ZERO,
            },
            GestureEvent::Rotate {
                delta: Vec2::ZERO,
                position: Point::ZERO,
                anchor: Point::ZERO,
            },
        ];
        dispatch(&mut handler, &events);
        assert!(handler.calls.is_empty());
    }
}
