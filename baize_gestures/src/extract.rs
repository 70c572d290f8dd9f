// Copyright 2025 the Baize Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Position extraction: raw client coordinates to container-relative points.
//!
//! The host delivers positions in whatever coordinate space its platform
//! events use. The recognizer works in the interaction surface's own space,
//! so every incoming position gets the configured offset applied exactly
//! once, here, before any classification runs.

use alloc::vec::Vec;
use kurbo::Point;

use crate::types::GestureConfig;

/// Convert a single raw position into container-relative coordinates.
pub fn local_point(raw: Point, config: &GestureConfig) -> Point {
    raw + config.offset
}

/// Convert an ordered touch list into container-relative coordinates,
/// preserving order.
pub fn local_touches(raw: &[Point], config: &GestureConfig) -> Vec<Point> {
    raw.iter().map(|&p| local_point(p, config)).collect()
}
