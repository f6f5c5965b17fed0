// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Various helper functions to assert truths during testing.

use std::vec::Vec;

use core::ops::Range;

use crate::ComposedFrame;

/// Returns the byte range of every line.
pub(crate) fn line_ranges(frame: &ComposedFrame) -> Vec<Range<usize>> {
    frame.lines().iter().map(|line| line.char_range()).collect()
}

/// Returns the `(origin_x, origin_y)` of every line.
pub(crate) fn origins(frame: &ComposedFrame) -> Vec<(f32, f32)> {
    frame
        .lines()
        .iter()
        .map(|line| (line.origin_x(), line.origin_y()))
        .collect()
}

/// Assert the invariants every composed frame upholds.
///
/// Lines cover a contiguous range starting at `start`, their tops never go
/// up, and their vertical metrics are non-negative.
pub(crate) fn assert_frame_invariants(frame: &ComposedFrame, start: usize, case: &str) {
    let lines = frame.lines();
    if let Some(first) = lines.first() {
        assert_eq!(first.char_start(), start, "{case}: first line start");
    }
    for pair in lines.windows(2) {
        assert_eq!(
            pair[0].char_end(),
            pair[1].char_start(),
            "{case}: lines {:?} and {:?} are not contiguous",
            pair[0].char_range(),
            pair[1].char_range()
        );
        assert!(
            pair[0].top() <= pair[1].top(),
            "{case}: line {:?} is below the next",
            pair[0].char_range()
        );
        if pair[0].height() > 0.0 {
            assert!(
                pair[0].top() < pair[1].top(),
                "{case}: lines {:?} and {:?} share a top",
                pair[0].char_range(),
                pair[1].char_range()
            );
        }
    }
    for line in lines {
        assert!(
            line.ascent() >= 0.0 && line.descent() >= 0.0 && line.leading() >= 0.0,
            "{case}: negative metrics on line {:?}: {:?}",
            line.char_range(),
            line.metrics()
        );
        assert!(
            line.origin_x().is_finite() && line.origin_y().is_finite(),
            "{case}: non-finite origin on line {:?}",
            line.char_range()
        );
    }
    assert!(
        frame.width().is_finite() && frame.height().is_finite(),
        "{case}: frame size {}x{}",
        frame.width(),
        frame.height()
    );
}
