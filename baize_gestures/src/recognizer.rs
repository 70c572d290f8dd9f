// Copyright 2025 the Baize Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture state machine.
//!
//! ## Overview
//!
//! [`Recognizer`] consumes timestamped [`RawInput`] events and returns
//! [`GestureEvent`] emissions as values; it never invokes callbacks, holds no
//! background execution, and performs no I/O. One instance serves one
//! interaction surface, and a gesture episode runs from first contact until
//! the contact count returns to zero.
//!
//! ## States
//!
//! The current classification is a tagged value carrying exactly the working
//! data that is valid in that state: the anchor recorded at gesture start,
//! the last observed position (or touch pair), and, while tapping, the press
//! deadline. Returning to idle drops all of it, so no state leaks into the
//! next gesture.
//!
//! ## Press timing
//!
//! There is no internal timer. While the machine is tapping,
//! [`Recognizer::pending_press`] reports the promotion deadline together with
//! a generation token; the host schedules its own timer and calls
//! [`Recognizer::press_timeout`] when it fires. A token from a superseded
//! tapping episode never matches, so a late callback is inert. As a second
//! line, any event whose timestamp is at or past the deadline promotes the
//! tap to a press before the event itself is processed, which keeps the
//! machine correct even if the host never schedules timers at all.
//!
//! ## Minimal example
//!
//! ```
//! use baize_gestures::recognizer::Recognizer;
//! use baize_gestures::types::{GestureConfig, GestureEvent, Modifiers, PointerButton, RawInput};
//! use kurbo::Point;
//!
//! let mut rec = Recognizer::new(GestureConfig::default());
//! let down = RawInput::ButtonDown {
//!     button: PointerButton::Primary,
//!     modifiers: Modifiers::empty(),
//!     position: Point::new(10.0, 10.0),
//!     time_ms: 0,
//! };
//! assert!(matches!(rec.handle(&down)[..], [GestureEvent::Start { .. }]));
//! let up = RawInput::ButtonUp { position: Point::new(10.0, 10.0), time_ms: 40 };
//! assert!(matches!(
//!     rec.handle(&up)[..],
//!     [GestureEvent::Tap { .. }, GestureEvent::End]
//! ));
//! ```

use alloc::vec::Vec;
use kurbo::{Point, Vec2};

use crate::extract::{local_point, local_touches};
use crate::two_finger::{TwoFingerEffect, classify};
use crate::types::{
    ActionKind, GestureConfig, GestureEvent, Modifiers, PointerButton, PressTimer, RawInput,
    Suppression, TimerToken,
};

/// The press-promotion deadline armed while tapping.
#[derive(Copy, Clone, Debug)]
struct Deadline {
    at_ms: u64,
    token: TimerToken,
}

/// Current classification plus the working data valid in that state.
///
/// Keeping the payload inside the variant makes the invariants structural:
/// the last position exists exactly while a gesture is active, and the press
/// deadline exists exactly while tapping.
#[derive(Copy, Clone, Debug)]
enum Action {
    Nothing,
    Tapping {
        anchor: Point,
        last: Point,
        deadline: Deadline,
    },
    Pressing {
        anchor: Point,
        last: Point,
    },
    Panning {
        anchor: Point,
        last: Point,
    },
    Zooming {
        anchor: Point,
        last: Point,
    },
    Rotating {
        anchor: Point,
        last: Point,
    },
    TwoFinger {
        anchor: Point,
        last: [Point; 2],
    },
}

/// Deterministic gesture recognizer for one interaction surface.
///
/// ## Usage
///
/// - Construct with [`Recognizer::new`] once per surface.
/// - Feed every raw event through [`Recognizer::handle`] in delivery order
///   and forward the returned emissions (for example via
///   [`dispatch`](crate::dispatch::dispatch)).
/// - After each call, re-check [`Recognizer::pending_press`] and schedule or
///   drop the host timer accordingly.
/// - Consult [`Recognizer::suppression`] to decide whether to swallow the
///   underlying platform event.
#[derive(Clone, Debug)]
pub struct Recognizer {
    config: GestureConfig,
    action: Action,
    generation: u64,
}

impl Recognizer {
    /// Create an idle recognizer with the given configuration.
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            action: Action::Nothing,
            generation: 0,
        }
    }

    /// The configuration supplied at construction.
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// The state machine's current classification.
    pub fn action(&self) -> ActionKind {
        match self.action {
            Action::Nothing => ActionKind::Nothing,
            Action::Tapping { .. } => ActionKind::Tapping,
            Action::Pressing { .. } => ActionKind::Pressing,
            Action::Panning { .. } => ActionKind::Panning,
            Action::Zooming { .. } => ActionKind::Zooming,
            Action::Rotating { .. } => ActionKind::Rotating,
            Action::TwoFinger { .. } => ActionKind::TwoFinger,
        }
    }

    /// How the host should treat the underlying platform events.
    pub fn suppression(&self) -> Suppression {
        Suppression {
            prevent_default: self.config.prevent_default,
            stop_propagation: self.config.stop_propagation,
        }
    }

    /// The press timer the host should have scheduled, if any.
    ///
    /// Present exactly while the machine is tapping.
    pub fn pending_press(&self) -> Option<PressTimer> {
        match self.action {
            Action::Tapping { deadline, .. } => Some(PressTimer {
                token: deadline.token,
                deadline_ms: deadline.at_ms,
            }),
            _ => None,
        }
    }

    /// Notify the recognizer that the host's press timer fired.
    ///
    /// Promotes tapping to pressing and emits the press. A stale `token`
    /// (any tapping episode other than the current one) is ignored and
    /// returns no emissions.
    pub fn press_timeout(&mut self, token: TimerToken) -> Vec<GestureEvent> {
        let mut out = Vec::new();
        if let Action::Tapping {
            anchor,
            last,
            deadline,
        } = self.action
            && deadline.token == token
        {
            out.push(GestureEvent::Press { position: anchor });
            self.action = Action::Pressing { anchor, last };
        }
        out
    }

    /// Process one raw input event and return the resulting emissions.
    ///
    /// Events are expected in delivery order with non-decreasing timestamps;
    /// each call runs to completion before the next.
    pub fn handle(&mut self, input: &RawInput) -> Vec<GestureEvent> {
        let mut out = Vec::new();
        // A tap held past its deadline is already a press, whether or not the
        // host timer has fired yet.
        self.promote_if_due(input.time_ms(), &mut out);
        match input {
            RawInput::ButtonDown {
                button,
                modifiers,
                position,
                time_ms,
            } => {
                let position = local_point(*position, &self.config);
                self.button_down(*button, *modifiers, position, *time_ms, &mut out);
            }
            RawInput::ButtonUp { .. } => self.end_contact(&mut out),
            RawInput::PointerMove { position, .. } => {
                let position = local_point(*position, &self.config);
                self.single_move(position, &mut out);
            }
            RawInput::TouchStart { touches, time_ms }
            | RawInput::TouchMove { touches, time_ms }
            | RawInput::TouchEnd { touches, time_ms } => {
                let touches = local_touches(touches, &self.config);
                self.touch_update(&touches, *time_ms, &mut out);
            }
            RawInput::Wheel {
                amount,
                unit,
                position,
                ..
            } => {
                // Stateless channel: wheel zoom bypasses the state machine.
                let position = local_point(*position, &self.config);
                out.push(GestureEvent::Zoom {
                    delta: Vec2::new(0.0, amount * unit.scale()),
                    position,
                    anchor: position,
                });
            }
        }
        out
    }

    /// Abort the current episode from the host side.
    ///
    /// Emits the episode's end when one is active. The host is responsible
    /// for ceasing event delivery afterwards.
    pub fn reset(&mut self) -> Vec<GestureEvent> {
        let mut out = Vec::new();
        if !matches!(self.action, Action::Nothing) {
            out.push(GestureEvent::End);
            self.action = Action::Nothing;
        }
        out
    }

    fn arm_press(&mut self, time_ms: u64) -> Deadline {
        self.generation += 1;
        Deadline {
            at_ms: time_ms.saturating_add(self.config.press_delay_ms),
            token: TimerToken(self.generation),
        }
    }

    fn promote_if_due(&mut self, time_ms: u64, out: &mut Vec<GestureEvent>) {
        if let Action::Tapping {
            anchor,
            last,
            deadline,
        } = self.action
            && time_ms >= deadline.at_ms
        {
            out.push(GestureEvent::Press { position: anchor });
            self.action = Action::Pressing { anchor, last };
        }
    }

    fn button_down(
        &mut self,
        button: PointerButton,
        modifiers: Modifiers,
        position: Point,
        time_ms: u64,
        out: &mut Vec<GestureEvent>,
    ) {
        if !matches!(self.action, Action::Nothing) {
            // One pointer-class contact at a time; a second button press
            // mid-gesture is ignored rather than restarting the episode.
            return;
        }
        out.push(GestureEvent::Start { position });
        self.action = match button {
            PointerButton::Secondary => Action::Zooming {
                anchor: position,
                last: position,
            },
            PointerButton::Tertiary => Action::Rotating {
                anchor: position,
                last: position,
            },
            PointerButton::Primary if modifiers.contains(Modifiers::SHIFT) => Action::Zooming {
                anchor: position,
                last: position,
            },
            PointerButton::Primary if modifiers.contains(Modifiers::CTRL) => Action::Rotating {
                anchor: position,
                last: position,
            },
            PointerButton::Primary => Action::Tapping {
                anchor: position,
                last: position,
                deadline: self.arm_press(time_ms),
            },
        };
    }

    /// Contact count reached zero: resolve and clear.
    fn end_contact(&mut self, out: &mut Vec<GestureEvent>) {
        match self.action {
            Action::Nothing => return,
            Action::Tapping { anchor, .. } => {
                // Still tapping at release means the deadline never passed.
                out.push(GestureEvent::Tap { position: anchor });
            }
            // A press already fired at its deadline; drag-style gestures
            // emit nothing on release.
            Action::Pressing { .. }
            | Action::Panning { .. }
            | Action::Zooming { .. }
            | Action::Rotating { .. }
            | Action::TwoFinger { .. } => {}
        }
        out.push(GestureEvent::End);
        self.action = Action::Nothing;
    }

    /// One single-point move in an active gesture.
    fn single_move(&mut self, position: Point, out: &mut Vec<GestureEvent>) {
        match self.action {
            // No buttons down, or the pair channel owns the gesture.
            Action::Nothing | Action::TwoFinger { .. } => {}
            Action::Tapping {
                anchor,
                last,
                deadline,
            } => {
                if self.breaks_threshold(position, anchor) {
                    // Leaving Tapping drops the deadline, so the pending
                    // press can no longer fire.
                    out.push(GestureEvent::Pan {
                        delta: position - last,
                        position,
                        anchor,
                    });
                    self.action = Action::Panning {
                        anchor,
                        last: position,
                    };
                } else {
                    self.action = Action::Tapping {
                        anchor,
                        last: position,
                        deadline,
                    };
                }
            }
            Action::Pressing { anchor, last } => {
                if self.breaks_threshold(position, anchor) {
                    out.push(GestureEvent::Pan {
                        delta: position - last,
                        position,
                        anchor,
                    });
                    self.action = Action::Panning {
                        anchor,
                        last: position,
                    };
                } else {
                    self.action = Action::Pressing {
                        anchor,
                        last: position,
                    };
                }
            }
            Action::Panning { anchor, last } => {
                out.push(GestureEvent::Pan {
                    delta: position - last,
                    position,
                    anchor,
                });
                self.action = Action::Panning {
                    anchor,
                    last: position,
                };
            }
            Action::Zooming { anchor, last } => {
                out.push(GestureEvent::Zoom {
                    delta: position - last,
                    position,
                    anchor,
                });
                self.action = Action::Zooming {
                    anchor,
                    last: position,
                };
            }
            Action::Rotating { anchor, last } => {
                out.push(GestureEvent::Rotate {
                    delta: position - last,
                    position,
                    anchor,
                });
                self.action = Action::Rotating {
                    anchor,
                    last: position,
                };
            }
        }
    }

    /// Reconcile the active touch list with the current state, then apply
    /// the move. Count changes mid-gesture become fresh sub-gestures.
    fn touch_update(&mut self, touches: &[Point], time_ms: u64, out: &mut Vec<GestureEvent>) {
        match *touches {
            // An empty (or malformed) touch list is the end of the gesture,
            // never a crash.
            [] => self.end_contact(out),
            [p] => match self.action {
                Action::Nothing => {
                    out.push(GestureEvent::Start { position: p });
                    self.action = Action::Tapping {
                        anchor: p,
                        last: p,
                        deadline: self.arm_press(time_ms),
                    };
                }
                Action::TwoFinger { .. } => {
                    // Lifting one of two fingers pans immediately; it is
                    // never a fresh tap.
                    self.action = Action::Panning { anchor: p, last: p };
                }
                _ => self.single_move(p, out),
            },
            [p0, p1] => {
                let pair = [p0, p1];
                match self.action {
                    Action::Nothing => {
                        let mid = p0.midpoint(p1);
                        out.push(GestureEvent::Start { position: mid });
                        self.action = Action::TwoFinger {
                            anchor: mid,
                            last: pair,
                        };
                    }
                    Action::TwoFinger { anchor, last } => {
                        let position = p0.midpoint(p1);
                        match classify(last, pair) {
                            TwoFingerEffect::Rotate(delta) => out.push(GestureEvent::Rotate {
                                delta,
                                position,
                                anchor,
                            }),
                            TwoFingerEffect::Zoom(delta) => out.push(GestureEvent::Zoom {
                                delta,
                                position,
                                anchor,
                            }),
                        }
                        self.action = Action::TwoFinger { anchor, last: pair };
                    }
                    _ => {
                        // A second finger joined a single-point gesture.
                        // Leaving Tapping here drops any pending press.
                        self.action = Action::TwoFinger {
                            anchor: p0.midpoint(p1),
                            last: pair,
                        };
                    }
                }
            }
            // Three or more touches suspend recognition until the count
            // drops back to two or fewer.
            _ => {
                if !matches!(self.action, Action::Nothing) {
                    out.push(GestureEvent::End);
                    self.action = Action::Nothing;
                }
            }
        }
    }

    fn breaks_threshold(&self, position: Point, anchor: Point) -> bool {
        let threshold = self.config.move_threshold;
        (position - anchor).hypot2() >= threshold * threshold
    }
}
