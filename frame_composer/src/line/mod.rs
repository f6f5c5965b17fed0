// Copyright 2024 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composed lines and the machinery that builds them.

mod break_picker;
mod metrics;
mod resolver;

use core::ops::Range;

use smallvec::SmallVec;

pub use break_picker::BreakPicker;
pub use metrics::LineMetrics;
pub use resolver::LineResolver;

/// A visual piece of a composed line.
#[derive(Clone, Debug, PartialEq)]
pub enum LineItem {
    /// Text taken from a single shaped run.
    Text {
        /// The bytes of the run shown by this item.
        char_range: Range<usize>,
        /// The bidi level of the run.
        bidi_level: u8,
        /// The pen advance of the item.
        advance: f32,
    },
    /// The token standing in for truncated content.
    Token {
        /// The character the token displays.
        glyph: char,
        /// The bidi level the token was placed at.
        bidi_level: u8,
        /// The pen advance of the token.
        advance: f32,
    },
}

impl LineItem {
    /// Returns the bidi level of the item.
    pub fn bidi_level(&self) -> u8 {
        match self {
            Self::Text { bidi_level, .. } | Self::Token { bidi_level, .. } => *bidi_level,
        }
    }

    /// Returns the pen advance of the item.
    pub fn advance(&self) -> f32 {
        match self {
            Self::Text { advance, .. } | Self::Token { advance, .. } => *advance,
        }
    }

    /// Returns `true` if the item is a truncation token.
    pub fn is_token(&self) -> bool {
        matches!(self, Self::Token { .. })
    }
}

/// A line of a composed frame.
///
/// Lines are built and positioned while a frame is composed; once the frame
/// is emitted they are only reachable through shared references.
#[derive(Clone, Debug, PartialEq)]
pub struct ComposedLine {
    char_range: Range<usize>,
    paragraph_level: u8,
    metrics: LineMetrics,
    origin_x: f32,
    origin_y: f32,
    items: SmallVec<[LineItem; 2]>,
}

impl ComposedLine {
    pub(crate) fn new(
        char_range: Range<usize>,
        paragraph_level: u8,
        metrics: LineMetrics,
        items: SmallVec<[LineItem; 2]>,
    ) -> Self {
        Self {
            char_range,
            paragraph_level,
            metrics,
            origin_x: 0.0,
            origin_y: 0.0,
            items,
        }
    }

    /// Returns the byte range covered by the line.
    pub fn char_range(&self) -> Range<usize> {
        self.char_range.clone()
    }

    /// Returns the first byte covered by the line.
    pub fn char_start(&self) -> usize {
        self.char_range.start
    }

    /// Returns the byte after the last one covered by the line.
    pub fn char_end(&self) -> usize {
        self.char_range.end
    }

    /// Returns the base level of the paragraph the line starts in.
    pub fn paragraph_level(&self) -> u8 {
        self.paragraph_level
    }

    /// Returns `true` if the line belongs to a right-to-left paragraph.
    pub fn is_rtl(&self) -> bool {
        self.paragraph_level & 1 != 0
    }

    /// Returns the metrics of the line.
    pub fn metrics(&self) -> &LineMetrics {
        &self.metrics
    }

    /// Returns the distance from the baseline to the top of the line.
    pub fn ascent(&self) -> f32 {
        self.metrics.ascent
    }

    /// Returns the distance from the baseline to the bottom of the glyphs.
    pub fn descent(&self) -> f32 {
        self.metrics.descent
    }

    /// Returns the space below the descent.
    pub fn leading(&self) -> f32 {
        self.metrics.leading
    }

    /// Returns `ascent + descent + leading`.
    pub fn height(&self) -> f32 {
        self.metrics.height()
    }

    /// Returns the full advance of the line, trailing whitespace included.
    pub fn extent(&self) -> f32 {
        self.metrics.advance
    }

    /// Returns the advance of the whitespace at the logical end of the line.
    pub fn trailing_whitespace_extent(&self) -> f32 {
        self.metrics.trailing_whitespace
    }

    /// Returns the x position of the start of the line, relative to the frame.
    pub fn origin_x(&self) -> f32 {
        self.origin_x
    }

    /// Returns the y position of the baseline, relative to the frame.
    pub fn origin_y(&self) -> f32 {
        self.origin_y
    }

    /// Returns the y position of the top of the line.
    pub fn top(&self) -> f32 {
        self.origin_y - self.metrics.ascent
    }

    /// Returns the y position of the bottom of the line, leading included.
    pub fn bottom(&self) -> f32 {
        self.top() + self.height()
    }

    /// Returns the visual items of the line, left to right.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns `true` if the line shows a truncation token.
    pub fn contains_truncation_token(&self) -> bool {
        self.items.iter().any(LineItem::is_token)
    }

    /// Returns the offset from the leading edge of a box of width `extent`
    /// to where the glyphs begin, for the given flush factor.
    pub fn flush_pen_offset(&self, flush_factor: f32, extent: f32) -> f32 {
        self.metrics
            .flush_pen_offset(flush_factor, extent, self.is_rtl())
    }

    /// Returns the x position of the visible right edge of the content.
    pub(crate) fn content_right(&self) -> f32 {
        let hanging = if self.is_rtl() {
            0.0
        } else {
            self.metrics.trailing_whitespace
        };
        self.origin_x + self.metrics.advance - hanging
    }

    pub(crate) fn metrics_mut(&mut self) -> &mut LineMetrics {
        &mut self.metrics
    }

    pub(crate) fn set_origin(&mut self, x: f32, y: f32) {
        self.origin_x = x;
        self.origin_y = y;
    }

    pub(crate) fn offset_y(&mut self, dy: f32) {
        self.origin_y += dy;
    }
}
