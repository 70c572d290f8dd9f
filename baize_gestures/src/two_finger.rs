// Copyright 2025 the Baize Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-finger disambiguation: rotate versus zoom from per-finger deltas.
//!
//! ## Overview
//!
//! A concurrent two-finger gesture carries no mode hint from the input
//! source; the only evidence is the pair of instantaneous per-finger
//! displacement vectors. Classification runs in two steps:
//!
//! 1. Fingers moving in parallel (same screen direction) read as a
//!    **vertical rotate**: the camera tilts with the shared motion.
//! 2. Divergent motion is judged against the axis between the two touch
//!    points. Motion along that axis reads as a **zoom** (the separation is
//!    changing); motion tangential to it reads as a **clockwise or
//!    anticlockwise rotate**.
//!
//! The classification is recomputed from raw positions every frame and never
//! latches, so a pinch can turn into a twist mid-gesture without the user
//! performing any explicit mode switch.

use kurbo::{Point, Vec2};

use crate::quadrant::{perpendicular, same_opposite_quadrant};

/// The per-frame interpretation of a two-finger move.
///
/// The payload is the delta to forward to the matching drag callback; see
/// [`GestureEvent`](crate::types::GestureEvent) for the axis conventions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TwoFingerEffect {
    /// Forward as a rotate delta.
    Rotate(Vec2),
    /// Forward as a zoom delta.
    Zoom(Vec2),
}

/// Classify one frame of two-finger motion.
///
/// `prev` and `curr` are the previous and current positions of the same two
/// touch points, in the same order. Two stationary fingers classify as a
/// zero-magnitude zoom, so repeated identical frames emit zeros rather than
/// flipping interpretation.
pub fn classify(prev: [Point; 2], curr: [Point; 2]) -> TwoFingerEffect {
    let d0 = curr[0] - prev[0];
    let d1 = curr[1] - prev[1];
    // The larger displacement is the less noisy sample of the two.
    let dominant = if d0.hypot2() >= d1.hypot2() { d0 } else { d1 };

    if same_opposite_quadrant(d0, d1) > 0 {
        // Parallel motion: tilt with the shared vertical component.
        return TwoFingerEffect::Rotate(Vec2::new(0.0, dominant.y));
    }

    let axis = curr[0] - curr[1];
    match same_opposite_quadrant(dominant, perpendicular(axis)) {
        0 => {
            // Motion runs along the finger-to-finger axis: the separation is
            // changing. Fingers moving apart yield negative y ("zoom in").
            let prev_separation = (prev[1] - prev[0]).hypot();
            let curr_separation = (curr[1] - curr[0]).hypot();
            TwoFingerEffect::Zoom(Vec2::new(0.0, prev_separation - curr_separation))
        }
        r => {
            // Tangential motion: twist around the pair's center.
            TwoFingerEffect::Rotate(Vec2::new(f64::from(r) * dominant.hypot(), 0.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    // Both fingers translating together tilt the camera by the shared
    // vertical motion.
    #[test]
    fn parallel_motion_is_vertical_rotate() {
        let prev = [Point::new(100.0, 100.0), Point::new(200.0, 200.0)];
        let curr = [Point::new(120.0, 110.0), Point::new(220.0, 210.0)];
        match classify(prev, curr) {
            TwoFingerEffect::Rotate(delta) => {
                assert_eq!(delta, Vec2::new(0.0, 10.0));
            }
            other => panic!("expected rotate, got {other:?}"),
        }
    }

    // Fingers separating along their own axis change the separation: zoom.
    #[test]
    fn divergent_motion_along_axis_is_zoom() {
        let prev = [Point::new(100.0, 100.0), Point::new(200.0, 200.0)];
        let curr = [Point::new(80.0, 80.0), Point::new(220.0, 220.0)];
        match classify(prev, curr) {
            TwoFingerEffect::Zoom(delta) => {
                assert_eq!(delta.x, 0.0);
                // Moving apart by 20 px per finger along the diagonal.
                assert_close(delta.y, -2.0 * (2.0 * 20.0 * 20.0_f64).sqrt());
            }
            other => panic!("expected zoom, got {other:?}"),
        }
    }

    #[test]
    fn convergent_motion_along_axis_is_positive_zoom() {
        let prev = [Point::new(80.0, 80.0), Point::new(220.0, 220.0)];
        let curr = [Point::new(100.0, 100.0), Point::new(200.0, 200.0)];
        match classify(prev, curr) {
            TwoFingerEffect::Zoom(delta) => {
                assert_eq!(delta.x, 0.0);
                assert!(delta.y > 0.0, "pinching in must zoom out");
            }
            other => panic!("expected zoom, got {other:?}"),
        }
    }

    // Fingers orbiting the pair's center move tangentially to their axis.
    #[test]
    fn tangential_motion_is_roll_rotate() {
        let prev = [Point::new(100.0, 100.0), Point::new(200.0, 200.0)];
        let curr = [Point::new(120.0, 80.0), Point::new(180.0, 220.0)];
        match classify(prev, curr) {
            TwoFingerEffect::Rotate(delta) => {
                assert_eq!(delta.y, 0.0);
                assert_close(delta.x, -(2.0 * 20.0 * 20.0_f64).sqrt());
            }
            other => panic!("expected rotate, got {other:?}"),
        }
    }

    #[test]
    fn opposite_tangential_motion_flips_sign() {
        let prev = [Point::new(120.0, 80.0), Point::new(180.0, 220.0)];
        let curr = [Point::new(100.0, 100.0), Point::new(200.0, 200.0)];
        match classify(prev, curr) {
            TwoFingerEffect::Rotate(delta) => {
                assert_eq!(delta.y, 0.0);
                assert!(delta.x > 0.0);
            }
            other => panic!("expected rotate, got {other:?}"),
        }
    }

    // Zero motion must not flip interpretation; it reads as a zero zoom.
    #[test]
    fn stationary_fingers_are_zero_zoom() {
        let pair = [Point::new(10.0, 10.0), Point::new(50.0, 50.0)];
        assert_eq!(classify(pair, pair), TwoFingerEffect::Zoom(Vec2::ZERO));
    }

    // One finger planted, the other pulling away: still a zoom, driven by
    // the moving (dominant) finger.
    #[test]
    fn single_moving_finger_along_axis_is_zoom() {
        let prev = [Point::new(100.0, 100.0), Point::new(200.0, 100.0)];
        let curr = [Point::new(100.0, 100.0), Point::new(230.0, 100.0)];
        match classify(prev, curr) {
            TwoFingerEffect::Zoom(delta) => assert_close(delta.y, -30.0),
            other => panic!("expected zoom, got {other:?}"),
        }
    }
}
