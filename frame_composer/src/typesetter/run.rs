// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::ops::Range;

use super::{TypesetError, TypesetErrorKind};

/// Vertical metrics of a shaped run.
#[derive(Copy, Clone, Default, Debug, PartialEq)]
pub struct RunMetrics {
    /// Distance from the baseline to the top of the run.
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the run.
    pub descent: f32,
    /// Extra space below the descent.
    pub leading: f32,
}

/// A run of text shaped with a single font at a single bidi level.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapedRun {
    char_range: Range<usize>,
    bidi_level: u8,
    metrics: RunMetrics,
    advances: Vec<f32>,
}

impl ShapedRun {
    /// Creates a shaped run.
    ///
    /// `advances[i]` is the pen advance contributed by the byte at
    /// `char_range.start + i`. Continuation bytes of a cluster contribute zero.
    pub fn new(
        char_range: Range<usize>,
        bidi_level: u8,
        metrics: RunMetrics,
        advances: Vec<f32>,
    ) -> Self {
        Self {
            char_range,
            bidi_level,
            metrics,
            advances,
        }
    }

    /// Returns the byte range covered by the run.
    pub fn char_range(&self) -> Range<usize> {
        self.char_range.clone()
    }

    /// Returns the bidi level of the run.
    pub fn bidi_level(&self) -> u8 {
        self.bidi_level
    }

    /// Returns the vertical metrics of the run.
    pub fn metrics(&self) -> RunMetrics {
        self.metrics
    }

    /// Returns the total advance of the part of the run inside `range`.
    pub fn advance(&self, range: Range<usize>) -> f32 {
        let start = range.start.max(self.char_range.start);
        let end = range.end.min(self.char_range.end);
        if start >= end {
            return 0.0;
        }
        let offset = self.char_range.start;
        self.advances[start - offset..end - offset].iter().sum()
    }
}

/// Shaped runs partitioning the typeset text, in logical order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunCollection {
    runs: Vec<ShapedRun>,
}

impl RunCollection {
    /// Creates a collection from runs in logical order.
    ///
    /// Runs must be non-empty, start at zero, follow each other without gaps
    /// and carry one advance per byte.
    pub fn new(runs: Vec<ShapedRun>) -> Result<Self, TypesetError> {
        let mut expected = 0;
        for (index, run) in runs.iter().enumerate() {
            if run.char_range.start != expected || run.char_range.is_empty() {
                return Err(TypesetError::new(
                    TypesetErrorKind::DiscontiguousRuns,
                    index,
                    run.char_range(),
                ));
            }
            if run.advances.len() != run.char_range.len()
                || run.advances.iter().any(|advance| !advance.is_finite())
            {
                return Err(TypesetError::new(
                    TypesetErrorKind::InvalidAdvances,
                    index,
                    run.char_range(),
                ));
            }
            expected = run.char_range.end;
        }
        Ok(Self { runs })
    }

    /// Returns the index of the run containing `char_index`.
    pub fn run_index(&self, char_index: usize) -> Option<usize> {
        let index = self
            .runs
            .partition_point(|run| run.char_range.end <= char_index);
        (index < self.runs.len()).then_some(index)
    }

    /// Returns the run at `index`.
    pub fn get(&self, index: usize) -> Option<&ShapedRun> {
        self.runs.get(index)
    }

    /// Returns the number of runs.
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Returns `true` if there are no runs.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Returns the byte after the end of the last run.
    pub fn char_end(&self) -> usize {
        self.runs.last().map_or(0, |run| run.char_range.end)
    }

    /// Returns the runs overlapping `range`, in logical order.
    pub fn intersecting(&self, range: Range<usize>) -> &[ShapedRun] {
        if range.is_empty() {
            return &[];
        }
        let (Some(first), Some(last)) = (self.run_index(range.start), self.run_index(range.end - 1))
        else {
            return &[];
        };
        &self.runs[first..=last]
    }

    /// Iterate over `(byte index, advance)` pairs inside `range`.
    pub fn advances(
        &self,
        range: Range<usize>,
    ) -> impl DoubleEndedIterator<Item = (usize, f32)> + '_ {
        self.intersecting(range.clone()).iter().flat_map(move |run| {
            let start = range.start.max(run.char_range.start);
            let end = range.end.min(run.char_range.end);
            let offset = run.char_range.start;
            run.advances[start - offset..end - offset]
                .iter()
                .enumerate()
                .map(move |(i, advance)| (start + i, *advance))
        })
    }

    /// Returns the total advance of `range`.
    pub fn advance(&self, range: Range<usize>) -> f32 {
        self.intersecting(range.clone())
            .iter()
            .map(|run| run.advance(range.clone()))
            .sum()
    }
}
