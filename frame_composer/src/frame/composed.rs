// Copyright 2024 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::ops::Range;

use crate::line::ComposedLine;

/// The rectangle a frame is composed into.
///
/// A non-positive width or height leaves that axis unbounded.
#[derive(Copy, Clone, Default, PartialEq, Debug)]
pub struct FrameRect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Maximum width of the lines.
    pub width: f32,
    /// Maximum height of the lines.
    pub height: f32,
}

impl FrameRect {
    /// Creates a frame rectangle.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Lines composed into a frame.
///
/// Line positions are relative to the frame origin.
#[derive(Clone, Debug, PartialEq)]
pub struct ComposedFrame {
    char_start: usize,
    char_end: usize,
    origin_x: f32,
    origin_y: f32,
    width: f32,
    height: f32,
    lines: Vec<ComposedLine>,
}

impl ComposedFrame {
    pub(crate) fn new(
        char_range: Range<usize>,
        origin: (f32, f32),
        size: (f32, f32),
        lines: Vec<ComposedLine>,
    ) -> Self {
        Self {
            char_start: char_range.start,
            char_end: char_range.end,
            origin_x: origin.0,
            origin_y: origin.1,
            width: size.0,
            height: size.1,
            lines,
        }
    }

    /// Returns the requested range, ending where composition stopped.
    pub fn char_range(&self) -> Range<usize> {
        self.char_start..self.char_end
    }

    /// Returns the first byte of the requested range.
    pub fn char_start(&self) -> usize {
        self.char_start
    }

    /// Returns the end of the last paragraph segment that was composed.
    pub fn char_end(&self) -> usize {
        self.char_end
    }

    /// Returns the x position of the frame.
    pub fn origin_x(&self) -> f32 {
        self.origin_x
    }

    /// Returns the y position of the frame.
    pub fn origin_y(&self) -> f32 {
        self.origin_y
    }

    /// Returns the width of the frame.
    ///
    /// An unbounded width is reported as the right edge of the widest line.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the height of the frame.
    ///
    /// An unbounded height is reported as the occupied height.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Returns the lines in logical order.
    pub fn lines(&self) -> &[ComposedLine] {
        &self.lines
    }

    /// Returns the number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if the frame has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the line at `index`.
    pub fn get(&self, index: usize) -> Option<&ComposedLine> {
        self.lines.get(index)
    }

    /// Returns the index of the line covering `char_index`.
    pub fn line_index_for_char(&self, char_index: usize) -> Option<usize> {
        let index = self
            .lines
            .partition_point(|line| line.char_end() <= char_index);
        let line = self.lines.get(index)?;
        (line.char_start() <= char_index).then_some(index)
    }

    /// Returns the index of the line under `y`, clamped to the first and
    /// last lines.
    pub fn line_index_for_y(&self, y: f32) -> usize {
        let index = self.lines.partition_point(|line| line.bottom() <= y);
        index.min(self.lines.len().saturating_sub(1))
    }

    /// Returns the distance from the top of the first line to the bottom of
    /// the last.
    pub fn occupied_height(&self) -> f32 {
        match (self.lines.first(), self.lines.last()) {
            (Some(first), Some(last)) => last.bottom() - first.top(),
            _ => 0.0,
        }
    }
}
