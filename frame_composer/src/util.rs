// Copyright 2021 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Misc helpers.

#[cfg(feature = "libm")]
#[allow(unused_imports)]
use core_maths::CoreFloat;

/// Rounds to the nearest integer, with halves rounded up.
///
/// Used for the pixel-snapped values handed to line height choosers.
#[expect(
    clippy::cast_possible_truncation,
    reason = "Pixel coordinates of a frame fit in an i32; the cast saturates otherwise."
)]
pub(crate) fn round_half_up(value: f32) -> i32 {
    (value + 0.5).floor() as i32
}

pub(crate) fn nearly_eq(x: f32, y: f32) -> bool {
    (x - y).abs() < f32::EPSILON
}

pub(crate) fn nearly_zero(x: f32) -> bool {
    nearly_eq(x, 0.)
}
