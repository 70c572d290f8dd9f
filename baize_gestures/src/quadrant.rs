// Copyright 2025 the Baize Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadrant classification: the parallel/antiparallel/neither test for 2D vectors.
//!
//! ## Overview
//!
//! Two-finger disambiguation only needs to know whether two instantaneous
//! displacement vectors point the same way, opposite ways, or neither. That
//! is a 45 degree cone test around 0 and 180 degrees, and it can be decided
//! without a square root: with `cos²θ = (v1·v2)² / (|v1|²·|v2|²)` and
//! `cos²(45°) = ½`, the cone boundary becomes `dot² > ½·|v1|²·|v2|²`, and
//! squaring makes the test symmetric about both 0° and 180°. The sign of the
//! dot product then separates the two cones.

use kurbo::Vec2;

/// Classify two vectors as parallel, antiparallel, or neither.
///
/// Returns `1` when the angle between `v1` and `v2` is within 45 degrees of
/// 0, `-1` when within 45 degrees of 180, and `0` otherwise. The boundary is
/// excluded: vectors at exactly 45 degrees classify as `0`.
///
/// A zero-magnitude input has no direction and classifies as `0`.
///
/// ```
/// use baize_gestures::quadrant::same_opposite_quadrant;
/// use kurbo::Vec2;
///
/// let v = Vec2::new(3.0, -1.5);
/// assert_eq!(same_opposite_quadrant(v, v), 1);
/// assert_eq!(same_opposite_quadrant(v, -v), -1);
/// assert_eq!(same_opposite_quadrant(Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)), 0);
/// ```
pub fn same_opposite_quadrant(v1: Vec2, v2: Vec2) -> i8 {
    let len2 = v1.hypot2() * v2.hypot2();
    if len2 == 0.0 {
        // A zero vector has no direction: neither parallel nor antiparallel.
        return 0;
    }
    let dot = v1.dot(v2);
    if dot * dot <= 0.5 * len2 {
        0
    } else if dot > 0.0 {
        1
    } else {
        -1
    }
}

/// The perpendicular of `v`, rotated clockwise in a y-down coordinate space.
pub fn perpendicular(v: Vec2) -> Vec2 {
    Vec2::new(v.y, -v.x)
}
