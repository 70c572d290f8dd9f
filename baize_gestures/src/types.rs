// Copyright 2025 the Baize Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the recognizer: configuration, raw input, emissions, and timer handles.
//!
//! ## Overview
//!
//! These types describe the recognizer protocol at both ends: [`RawInput`] is
//! what the host feeds in, [`GestureEvent`] is what the recognizer emits, and
//! [`GestureConfig`] tunes the classification thresholds. They are referenced
//! by the [`recognizer`](crate::recognizer) and consumed by downstream hosts.

use alloc::vec::Vec;
use kurbo::{Point, Vec2};

/// Tuning parameters for gesture classification.
///
/// Supplied once when constructing a [`Recognizer`](crate::recognizer::Recognizer)
/// and immutable for its lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureConfig {
    /// Pixel distance from the anchor beyond which a stationary gesture
    /// becomes a pan. Compared against squared distance internally, so the
    /// boundary itself (distance exactly equal) starts the pan.
    pub move_threshold: f64,
    /// Milliseconds of immobility required to promote a tap into a press.
    pub press_delay_ms: u64,
    /// Coordinate-space correction applied to every extracted position,
    /// converting raw client coordinates into container-relative ones.
    pub offset: Vec2,
    /// Whether the host should suppress the platform's default handling of
    /// the underlying input events.
    pub prevent_default: bool,
    /// Whether the host should stop the underlying input events from
    /// propagating further.
    pub stop_propagation: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            move_threshold: 5.0,
            press_delay_ms: 500,
            offset: Vec2::ZERO,
            prevent_default: true,
            stop_propagation: true,
        }
    }
}

/// Host instructions for the underlying platform event.
///
/// Returned by [`Recognizer::suppression`](crate::recognizer::Recognizer::suppression);
/// the recognizer itself never touches the platform event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Suppression {
    /// Suppress the platform's default behavior for the event.
    pub prevent_default: bool,
    /// Stop the event from propagating to other listeners.
    pub stop_propagation: bool,
}

/// Pointer-class button identity.
///
/// Secondary and tertiary buttons map directly to zoom/rotate, bypassing
/// tap and press detection entirely.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// The primary button; starts tap detection unless a modifier remaps it.
    Primary,
    /// The secondary button; always starts a zoom drag.
    Secondary,
    /// The tertiary button; always starts a rotate drag.
    Tertiary,
}

bitflags::bitflags! {
    /// Keyboard modifiers active at button-down time.
    ///
    /// Modifiers let the primary button stand in for the secondary and
    /// tertiary buttons on single-button devices.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift-equivalent modifier; remaps the primary button to zoom.
        const SHIFT = 0b0000_0001;
        /// Ctrl-equivalent modifier; remaps the primary button to rotate.
        const CTRL  = 0b0000_0010;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::empty()
    }
}

/// Device-dependent unit of a wheel event's delta.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WheelUnit {
    /// Delta is expressed in pixels.
    Pixel,
    /// Delta is expressed in text lines.
    Line,
    /// Delta is expressed in pages.
    Page,
}

impl WheelUnit {
    /// Pixels represented by one unit of wheel delta.
    pub fn scale(self) -> f64 {
        match self {
            Self::Pixel => 1.0,
            Self::Line => 20.0,
            Self::Page => 800.0,
        }
    }
}

/// A raw input event as delivered by the host.
///
/// Positions are in the host's client coordinate space; the recognizer
/// applies [`GestureConfig::offset`] before using them. Timestamps are
/// milliseconds on any monotonic clock the host chooses, and only ever
/// compared against each other.
#[derive(Clone, Debug, PartialEq)]
pub enum RawInput {
    /// A pointer button was pressed.
    ButtonDown {
        /// Which button went down.
        button: PointerButton,
        /// Modifiers held at press time.
        modifiers: Modifiers,
        /// Pointer position in client coordinates.
        position: Point,
        /// Event timestamp in milliseconds.
        time_ms: u64,
    },
    /// A pointer button was released, ending the pointer-class contact.
    ButtonUp {
        /// Pointer position in client coordinates.
        position: Point,
        /// Event timestamp in milliseconds.
        time_ms: u64,
    },
    /// The pointer moved while a button may be held.
    PointerMove {
        /// Pointer position in client coordinates.
        position: Point,
        /// Event timestamp in milliseconds.
        time_ms: u64,
    },
    /// One or more touch points went down; `touches` is the full ordered
    /// list of active points.
    TouchStart {
        /// All active touch points, in contact order.
        touches: Vec<Point>,
        /// Event timestamp in milliseconds.
        time_ms: u64,
    },
    /// Active touch points moved; `touches` is the full ordered list.
    TouchMove {
        /// All active touch points, in contact order.
        touches: Vec<Point>,
        /// Event timestamp in milliseconds.
        time_ms: u64,
    },
    /// One or more touch points lifted; `touches` is the ordered list of
    /// points still in contact (empty when the last finger lifts).
    TouchEnd {
        /// Touch points remaining in contact, in contact order.
        touches: Vec<Point>,
        /// Event timestamp in milliseconds.
        time_ms: u64,
    },
    /// A wheel tick. Handled on a stateless channel, independent of the
    /// gesture state machine.
    Wheel {
        /// Signed wheel delta in `unit`s.
        amount: f64,
        /// Device-dependent unit of `amount`.
        unit: WheelUnit,
        /// Pointer position in client coordinates.
        position: Point,
        /// Event timestamp in milliseconds.
        time_ms: u64,
    },
}

impl RawInput {
    /// The event's timestamp in milliseconds.
    pub fn time_ms(&self) -> u64 {
        match *self {
            Self::ButtonDown { time_ms, .. }
            | Self::ButtonUp { time_ms, .. }
            | Self::PointerMove { time_ms, .. }
            | Self::TouchStart { time_ms, .. }
            | Self::TouchMove { time_ms, .. }
            | Self::TouchEnd { time_ms, .. }
            | Self::Wheel { time_ms, .. } => time_ms,
        }
    }
}

/// A semantic interaction intent emitted by the recognizer.
///
/// All positions and deltas are container-relative (post offset correction).
/// Two-finger gestures report the midpoint of the touch pair as their
/// position and anchor.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GestureEvent {
    /// Contact began; fired exactly once per gesture episode.
    Start {
        /// Position at which contact began.
        position: Point,
    },
    /// Contact count returned to zero; fired exactly once per episode.
    End,
    /// The gesture resolved as a tap: released before the press delay with
    /// no qualifying movement.
    Tap {
        /// The anchor position recorded at gesture start.
        position: Point,
    },
    /// The press delay elapsed with no qualifying movement; fired at the
    /// instant of the deadline, not on release.
    Press {
        /// The anchor position recorded at gesture start.
        position: Point,
    },
    /// A qualifying move while panning.
    Pan {
        /// Frame-to-frame displacement.
        delta: Vec2,
        /// Current position.
        position: Point,
        /// Anchor position recorded at gesture start.
        anchor: Point,
    },
    /// A qualifying move while zooming, a wheel tick, or a two-finger
    /// divergent move.
    Zoom {
        /// Frame-to-frame displacement. For two-finger and wheel zooms only
        /// the `y` component carries the zoom amount; fingers moving apart
        /// yield negative `y`.
        delta: Vec2,
        /// Current position.
        position: Point,
        /// Anchor position recorded at gesture start.
        anchor: Point,
    },
    /// A qualifying move while rotating: single-pointer rotate drags,
    /// two-finger parallel moves (`y` component), or two-finger tangential
    /// moves (`x` component).
    Rotate {
        /// Frame-to-frame displacement.
        delta: Vec2,
        /// Current position.
        position: Point,
        /// Anchor position recorded at gesture start.
        anchor: Point,
    },
}

/// Payload-free view of the state machine's current classification.
///
/// Returned by [`Recognizer::action`](crate::recognizer::Recognizer::action)
/// for hosts and tests that want to observe the machine without its working
/// data.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// No contact; the machine is idle.
    Nothing,
    /// Contact began and may still resolve as a tap.
    Tapping,
    /// The press delay elapsed without qualifying movement.
    Pressing,
    /// A single-point drag.
    Panning,
    /// A single-point or wheel zoom drag.
    Zooming,
    /// A single-point rotate drag.
    Rotating,
    /// Two simultaneous touch points; interpretation is resolved per frame.
    TwoFinger,
}

/// Generation token identifying one arming of the press timer.
///
/// Every time the machine enters `Tapping` it arms the timer with a fresh
/// token; a token presented after the machine has moved on never matches,
/// so a late host timer callback is inert by construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TimerToken(pub(crate) u64);

/// A press-promotion deadline the host should schedule.
///
/// Returned by [`Recognizer::pending_press`](crate::recognizer::Recognizer::pending_press).
/// When the deadline arrives, pass `token` back via
/// [`Recognizer::press_timeout`](crate::recognizer::Recognizer::press_timeout).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PressTimer {
    /// Token to present when the deadline fires.
    pub token: TimerToken,
    /// Absolute deadline in the host's event-timestamp clock, milliseconds.
    pub deadline_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_is_sane() {
        let cfg = GestureConfig::default();
        assert!(cfg.move_threshold > 0.0, "threshold must be positive");
        assert!(cfg.press_delay_ms > 0, "press delay must be positive");
        assert_eq!(cfg.offset, Vec2::ZERO);
    }

    #[test]
    fn wheel_unit_scales_are_increasing() {
        assert!(WheelUnit::Pixel.scale() < WheelUnit::Line.scale());
        assert!(WheelUnit::Line.scale() < WheelUnit::Page.scale());
    }

    #[test]
    fn raw_input_reports_its_timestamp() {
        let ev = RawInput::PointerMove {
            position: Point::new(1.0, 2.0),
            time_ms: 42,
        };
        assert_eq!(ev.time_ms(), 42);
        let ev = RawInput::Wheel {
            amount: -3.0,
            unit: WheelUnit::Line,
            position: Point::ZERO,
            time_ms: 7,
        };
        assert_eq!(ev.time_ms(), 7);
    }

    #[test]
    fn modifiers_compose() {
        let m = Modifiers::SHIFT | Modifiers::CTRL;
        assert!(m.contains(Modifiers::SHIFT));
        assert!(m.contains(Modifiers::CTRL));
        assert!(Modifiers::default().is_empty());
    }
}
