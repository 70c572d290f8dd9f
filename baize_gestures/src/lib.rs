// Copyright 2025 the Baize Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Baize Gestures: a deterministic gesture recognizer for pointer and touch input.
//!
//! ## Overview
//!
//! This crate converts a raw stream of button, pointer-move, touch, and wheel
//! events into a small set of semantic interaction intents: tap, press, pan,
//! zoom, and rotate. It was built for a virtual-tabletop client, where the
//! same finger or button drag must drive camera panning, pinch-to-zoom, and
//! twist-to-rotate with no mode switch from the user, but it knows nothing
//! about tabletops: the host supplies positions and timestamps and applies
//! the emitted deltas however it likes.
//!
//! It does not interpret what was touched. Hit testing, camera math, and
//! state persistence belong to the host; this crate only classifies motion.
//!
//! ## Design
//!
//! - **Emissions as values.** [`Recognizer::handle`](crate::recognizer::Recognizer::handle)
//!   returns a `Vec` of [`GestureEvent`](crate::types::GestureEvent)s instead
//!   of invoking callbacks, so every transition is unit-testable without a UI
//!   harness. A callback surface is available on top via
//!   [`dispatch`](crate::dispatch).
//! - **No hidden clock.** Events carry millisecond timestamps, and the press
//!   timer is a deadline plus generation token the host schedules itself; a
//!   stale token is inert by construction.
//! - **Per-frame disambiguation.** A two-finger gesture is re-classified as
//!   rotate or zoom on every frame from the instantaneous per-finger deltas
//!   ([`two_finger`]); it never latches an interpretation.
//! - Single gestures are disambiguated purely by elapsed time and movement
//!   distance: release before the press delay is a tap, holding still past
//!   it is a press, and crossing the move threshold starts a pan.
//!
//! ## Workflow
//!
//! 1) Normalize: supply an offset in [`GestureConfig`](crate::types::GestureConfig)
//!    so emitted positions are container-relative.
//! 2) Feed: pass each platform event through `handle` in delivery order.
//! 3) Forward: hand the returned batch to your controller, for example via a
//!    [`GestureHandler`](crate::dispatch::GestureHandler).
//! 4) Schedule: after each call, reconcile your timer with
//!    [`pending_press`](crate::recognizer::Recognizer::pending_press).
//!
//! ## Minimal example
//!
//! ```
//! use baize_gestures::recognizer::Recognizer;
//! use baize_gestures::types::{GestureConfig, GestureEvent, Modifiers, PointerButton, RawInput};
//! use kurbo::Point;
//!
//! let mut rec = Recognizer::new(GestureConfig::default());
//!
//! // Press and quickly release the primary button: a tap.
//! let down = RawInput::ButtonDown {
//!     button: PointerButton::Primary,
//!     modifiers: Modifiers::empty(),
//!     position: Point::new(10.0, 10.0),
//!     time_ms: 0,
//! };
//! let up = RawInput::ButtonUp { position: Point::new(10.0, 10.0), time_ms: 40 };
//!
//! assert!(matches!(rec.handle(&down)[..], [GestureEvent::Start { .. }]));
//! assert!(matches!(
//!     rec.handle(&up)[..],
//!     [GestureEvent::Tap { .. }, GestureEvent::End]
//! ));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod dispatch;
pub mod extract;
pub mod quadrant;
pub mod recognizer;
pub mod two_finger;
pub mod types;
