// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paragraph styles consulted while composing a frame.

use alloc::sync::Arc;
use core::fmt::Debug;
use core::ops::Range;

use smallvec::SmallVec;
use spanned_text::{Span, SpannedText, TextStorage};

/// Paragraph-level horizontal alignment, relative to the paragraph direction.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub enum ParagraphAlignment {
    /// Align to the start edge of the paragraph.
    #[default]
    Normal,
    /// Center each line.
    Center,
    /// Align to the end edge of the paragraph.
    Opposite,
}

impl ParagraphAlignment {
    /// Returns the fraction of slack space placed before a line.
    pub fn flush_factor(self, is_rtl: bool) -> f32 {
        match (self, is_rtl) {
            (Self::Normal, false) | (Self::Opposite, true) => 0.0,
            (Self::Normal, true) | (Self::Opposite, false) => 1.0,
            (Self::Center, _) => 0.5,
        }
    }
}

/// Margin on the leading edge of a paragraph.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct LeadingMargin {
    /// Margin of the first `line_count` lines.
    pub first_line: f32,
    /// Margin of the remaining lines.
    pub rest: f32,
    /// Number of lines using `first_line`; at least one.
    pub line_count: u32,
}

impl LeadingMargin {
    /// Creates a margin that applies `first_line` to the first line only.
    pub fn new(first_line: f32, rest: f32) -> Self {
        Self {
            first_line,
            rest,
            line_count: 1,
        }
    }

    /// Applies `first_line` to the first `line_count` lines.
    pub fn with_line_count(mut self, line_count: u32) -> Self {
        self.line_count = line_count.max(1);
        self
    }
}

/// Pixel-snapped line metrics handed to a [`LineHeightChooser`].
///
/// Follows the baseline-relative convention: `ascent` is negative (above the
/// baseline) while `descent` and `leading` are positive.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct FontMetricsInt {
    /// Offset of the top of the line from the baseline; negative.
    pub ascent: i32,
    /// Offset of the bottom of the line from the baseline.
    pub descent: i32,
    /// Extra space below the descent.
    pub leading: i32,
}

/// Overrides the metrics of lines covered by a [`LineHeightSpan`].
pub trait LineHeightChooser {
    /// Adjusts `metrics` for the line covering `line_range` of `text`.
    ///
    /// `text` is the whole text of the typesetter, so choosers can inspect
    /// the line content without holding a handle to it. `span_top` is the rounded top of the line where the span begins and
    /// `line_top` the rounded top of the current line, both relative to the
    /// frame.
    fn choose_height(
        &self,
        text: &str,
        line_range: Range<usize>,
        span_top: i32,
        line_top: i32,
        metrics: &mut FontMetricsInt,
    );
}

impl<F> LineHeightChooser for F
where
    F: Fn(&str, Range<usize>, i32, i32, &mut FontMetricsInt),
{
    fn choose_height(
        &self,
        text: &str,
        line_range: Range<usize>,
        span_top: i32,
        line_top: i32,
        metrics: &mut FontMetricsInt,
    ) {
        self(text, line_range, span_top, line_top, metrics);
    }
}

/// A shareable [`LineHeightChooser`].
#[derive(Clone)]
pub struct LineHeightSpan {
    chooser: Arc<dyn LineHeightChooser + Send + Sync>,
}

impl LineHeightSpan {
    /// Wraps a chooser.
    pub fn new(chooser: impl LineHeightChooser + Send + Sync + 'static) -> Self {
        Self {
            chooser: Arc::new(chooser),
        }
    }

    /// Creates a chooser that forces every line to `height` pixels by
    /// growing or shrinking its descent.
    pub fn fixed(height: i32) -> Self {
        Self::new(
            move |_: &str, _: Range<usize>, _: i32, _: i32, metrics: &mut FontMetricsInt| {
                let current = metrics.descent - metrics.ascent + metrics.leading;
                metrics.descent += height - current;
            },
        )
    }

    /// Returns the chooser.
    pub fn chooser(&self) -> &(dyn LineHeightChooser + Send + Sync) {
        &*self.chooser
    }
}

impl Debug for LineHeightSpan {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LineHeightSpan").finish_non_exhaustive()
    }
}

/// A style applied to whole paragraphs.
#[derive(Clone, Debug)]
pub enum ParagraphStyle {
    /// Horizontal alignment of the paragraph's lines.
    Alignment(ParagraphAlignment),
    /// Margin on the leading edge of the paragraph.
    LeadingMargin(LeadingMargin),
    /// Line metric overrides.
    LineHeight(LineHeightSpan),
}

impl ParagraphStyle {
    /// Returns the kind of this style.
    pub fn kind(&self) -> StyleKind {
        match self {
            Self::Alignment(_) => StyleKind::Alignment,
            Self::LeadingMargin(_) => StyleKind::LeadingMargin,
            Self::LineHeight(_) => StyleKind::LineHeight,
        }
    }
}

/// Discriminant of a [`ParagraphStyle`], used to filter queries.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StyleKind {
    /// [`ParagraphStyle::Alignment`].
    Alignment,
    /// [`ParagraphStyle::LeadingMargin`].
    LeadingMargin,
    /// [`ParagraphStyle::LineHeight`].
    LineHeight,
}

/// A paragraph style together with the range it was applied to.
pub type StyleSpan<'a> = Span<'a, ParagraphStyle>;

/// Read-only access to the paragraph styles of a text.
pub trait StyleQuery {
    /// Returns the spans overlapping `range`, optionally restricted to one
    /// kind, in the order they were applied.
    fn spans_intersecting(
        &self,
        range: Range<usize>,
        kind: Option<StyleKind>,
    ) -> SmallVec<[StyleSpan<'_>; 4]>;

    /// Returns the byte offset where `span` begins.
    fn span_start_of(&self, span: &StyleSpan<'_>) -> usize;
}

impl<T: Debug + TextStorage> StyleQuery for SpannedText<T, ParagraphStyle> {
    fn spans_intersecting(
        &self,
        range: Range<usize>,
        kind: Option<StyleKind>,
    ) -> SmallVec<[StyleSpan<'_>; 4]> {
        debug_assert!(range.start <= range.end, "style query with reversed range");
        SpannedText::spans_intersecting(self, range)
            .filter(|span| kind.is_none_or(|kind| span.style().kind() == kind))
            .collect()
    }

    fn span_start_of(&self, span: &StyleSpan<'_>) -> usize {
        self.span_start(span.id()).unwrap_or(span.start())
    }
}
