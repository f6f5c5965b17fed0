// Copyright 2021 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Greedy break selection.

use core::ops::Range;

use crate::typesetter::{BreakMode, BreakTable, RunCollection};

/// Outcome of walking a range against an extent.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Scan {
    /// Everything up to the returned boundary fits; the walk reached the
    /// upper bound or a mandatory break.
    Fits(usize),
    /// The content overflowed; holds the last boundary that still fit.
    Overflow(Option<usize>),
}

/// Picks line ends from the advances of shaped runs and a break table.
#[derive(Copy, Clone, Debug)]
pub struct BreakPicker<'a> {
    runs: &'a RunCollection,
    breaks: &'a BreakTable,
}

impl<'a> BreakPicker<'a> {
    /// Creates a picker over the given tables.
    pub fn new(runs: &'a RunCollection, breaks: &'a BreakTable) -> Self {
        Self { runs, breaks }
    }

    /// Returns the largest end in `start + 1..=upper` whose line fits `extent`.
    ///
    /// Trailing whitespace hangs past the extent. A mandatory break always
    /// ends the line. In [`BreakMode::Line`], if no line break opportunity
    /// fits, character boundaries are tried instead; if not even a single
    /// grapheme fits, the first boundary after `start` is returned, so the
    /// result is never `start`.
    pub fn suggest_forward_break(
        &self,
        start: usize,
        upper: usize,
        extent: f32,
        mode: BreakMode,
    ) -> usize {
        debug_assert!(start < upper, "forward break from an empty range");
        match self.scan_forward(start..upper, extent, mode) {
            Scan::Fits(end) | Scan::Overflow(Some(end)) => end,
            Scan::Overflow(None) => match mode {
                BreakMode::Line => {
                    self.suggest_forward_break(start, upper, extent, BreakMode::Character)
                }
                BreakMode::Character => self.next_boundary(start, upper),
            },
        }
    }

    /// Like [`suggest_forward_break`](Self::suggest_forward_break), but
    /// returns `start` when nothing fits.
    pub fn suggest_forward_truncation_break(
        &self,
        start: usize,
        upper: usize,
        extent: f32,
        mode: BreakMode,
    ) -> usize {
        if start >= upper {
            return start;
        }
        match self.scan_forward(start..upper, extent, mode) {
            Scan::Fits(end) | Scan::Overflow(Some(end)) => end,
            Scan::Overflow(None) => match mode {
                BreakMode::Line => self.suggest_forward_truncation_break(
                    start,
                    upper,
                    extent,
                    BreakMode::Character,
                ),
                BreakMode::Character => start,
            },
        }
    }

    /// Returns the smallest start in `lower..end` whose line up to `end`
    /// fits `extent`, or `end` when nothing fits.
    ///
    /// A mandatory break inside the range bounds the result from below.
    pub fn suggest_backward_break(
        &self,
        lower: usize,
        end: usize,
        extent: f32,
        mode: BreakMode,
    ) -> usize {
        let mut total = 0.0;
        let mut last_fit = None;
        for (index, advance) in self.runs.advances(lower..end).rev() {
            total += advance;
            if total > extent {
                break;
            }
            if index > lower && self.breaks.is_mandatory(index) {
                return index;
            }
            if index == lower || self.breaks.allows_break(index, mode) {
                last_fit = Some(index);
            }
        }
        match (last_fit, mode) {
            (Some(start), _) => start,
            (None, BreakMode::Line) => {
                self.suggest_backward_break(lower, end, extent, BreakMode::Character)
            }
            (None, BreakMode::Character) => end,
        }
    }

    fn scan_forward(&self, range: Range<usize>, extent: f32, mode: BreakMode) -> Scan {
        let upper = range.end;
        let mut total = 0.0;
        let mut visible = 0.0;
        let mut last_fit = None;
        for (index, advance) in self.runs.advances(range) {
            total += advance;
            if !self.breaks.is_whitespace(index) {
                visible = total;
            }
            if visible > extent {
                return Scan::Overflow(last_fit);
            }
            let boundary = index + 1;
            if boundary < upper && self.breaks.is_mandatory(boundary) {
                return Scan::Fits(boundary);
            }
            if self.breaks.allows_break(boundary, mode) {
                last_fit = Some(boundary);
            }
        }
        Scan::Fits(upper)
    }

    fn next_boundary(&self, start: usize, upper: usize) -> usize {
        (start + 1..upper)
            .find(|&index| self.breaks.allows_break(index, BreakMode::Character))
            .unwrap_or(upper)
    }
}

#[cfg(test)]
mod tests {
    use super::BreakPicker;
    use crate::typesetter::{
        BreakFlags, BreakMode, BreakTable, RunCollection, RunMetrics, ShapedRun,
    };
    use alloc::vec;
    use alloc::vec::Vec;

    /// Fixed 10px advances; line breaks after spaces and hard breaks after `\n`.
    fn tables(text: &str) -> (RunCollection, BreakTable) {
        let runs = RunCollection::new(vec![ShapedRun::new(
            0..text.len(),
            0,
            RunMetrics::default(),
            vec![10.0; text.len()],
        )])
        .unwrap();
        let bytes = text.as_bytes();
        let flags: Vec<_> = (0..=text.len())
            .map(|i| {
                let mut flags = BreakFlags::CHARACTER;
                if i == text.len() || (i > 0 && bytes[i - 1] == b' ') {
                    flags |= BreakFlags::LINE;
                }
                if i > 0 && bytes[i - 1] == b'\n' {
                    flags |= BreakFlags::MANDATORY;
                }
                if i < text.len() && bytes[i].is_ascii_whitespace() {
                    flags |= BreakFlags::WHITESPACE;
                }
                flags
            })
            .collect();
        (runs, BreakTable::new(flags))
    }

    #[test]
    fn breaks_after_last_fitting_word() {
        let (runs, breaks) = tables("aaa bbb ccc");
        let picker = BreakPicker::new(&runs, &breaks);
        assert_eq!(picker.suggest_forward_break(0, 11, 65.0, BreakMode::Line), 4);
        // The space after "bbb" hangs.
        assert_eq!(picker.suggest_forward_break(0, 11, 70.0, BreakMode::Line), 8);
        assert_eq!(picker.suggest_forward_break(0, 11, 1000.0, BreakMode::Line), 11);
        assert_eq!(picker.suggest_forward_break(4, 11, 30.0, BreakMode::Line), 8);
    }

    #[test]
    fn falls_back_to_characters_then_single_grapheme() {
        let (runs, breaks) = tables("abcdefgh");
        let picker = BreakPicker::new(&runs, &breaks);
        assert_eq!(picker.suggest_forward_break(0, 8, 35.0, BreakMode::Line), 3);
        assert_eq!(picker.suggest_forward_break(0, 8, 5.0, BreakMode::Line), 1);
        assert_eq!(picker.suggest_forward_break(6, 8, 0.0, BreakMode::Character), 7);
    }

    #[test]
    fn mandatory_break_ends_line() {
        let (runs, breaks) = tables("ab\ncd");
        let picker = BreakPicker::new(&runs, &breaks);
        assert_eq!(picker.suggest_forward_break(0, 5, 1000.0, BreakMode::Line), 3);
        assert_eq!(picker.suggest_forward_break(3, 5, 1000.0, BreakMode::Line), 5);
    }

    #[test]
    fn forward_break_is_monotone_in_extent() {
        let (runs, breaks) = tables("one two three four five");
        let picker = BreakPicker::new(&runs, &breaks);
        let mut previous = 0;
        for step in 0..30 {
            let extent = step as f32 * 10.0;
            let end = picker.suggest_forward_break(0, 23, extent, BreakMode::Line);
            assert!(end > 0, "break at start for extent {extent}");
            assert!(end >= previous, "extent {extent} moved break back");
            previous = end;
        }
    }

    #[test]
    fn truncation_breaks_may_be_empty() {
        let (runs, breaks) = tables("abcdef");
        let picker = BreakPicker::new(&runs, &breaks);
        assert_eq!(
            picker.suggest_forward_truncation_break(0, 6, 5.0, BreakMode::Character),
            0
        );
        assert_eq!(
            picker.suggest_forward_truncation_break(0, 6, 25.0, BreakMode::Character),
            2
        );
        assert_eq!(picker.suggest_backward_break(0, 6, 25.0, BreakMode::Character), 4);
        assert_eq!(picker.suggest_backward_break(0, 6, 5.0, BreakMode::Character), 6);
        assert_eq!(picker.suggest_backward_break(0, 6, 100.0, BreakMode::Line), 0);
    }

    #[test]
    fn backward_break_prefers_word_starts() {
        let (runs, breaks) = tables("aaa bbb ccc");
        let picker = BreakPicker::new(&runs, &breaks);
        assert_eq!(picker.suggest_backward_break(0, 11, 65.0, BreakMode::Line), 8);
        assert_eq!(picker.suggest_backward_break(0, 11, 75.0, BreakMode::Line), 4);
        assert_eq!(picker.suggest_backward_break(0, 11, 25.0, BreakMode::Line), 9);
    }
}
