// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pre-typeset input consumed by the frame composer.

mod breaks;
mod paragraph;
mod run;

use core::fmt::Debug;
use core::ops::Range;

use spanned_text::{SpannedText, TextStorage};

use crate::line::{BreakPicker, ComposedLine, LineResolver};
use crate::style::ParagraphStyle;

pub use breaks::{BreakFlags, BreakMode, BreakTable, TruncationPlace};
pub use paragraph::{BidiParagraph, ParagraphCollection};
pub use run::{RunCollection, RunMetrics, ShapedRun};

/// The shaped token inserted where content is truncated, usually an ellipsis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TruncationToken {
    /// The character the token displays.
    pub glyph: char,
    /// The pen advance of the token.
    pub advance: f32,
    /// The vertical metrics of the token.
    pub metrics: RunMetrics,
}

impl TruncationToken {
    /// Creates a horizontal ellipsis token.
    pub fn ellipsis(advance: f32, metrics: RunMetrics) -> Self {
        Self {
            glyph: '\u{2026}',
            advance,
            metrics,
        }
    }
}

/// Read-only output of a typesetting pass over a styled text.
///
/// Holds the text with its paragraph styles, the bidi paragraphs, the shaped
/// runs and the break table. All tables cover exactly the bytes of the text.
#[derive(Debug)]
pub struct Typesetter<T: Debug + TextStorage> {
    spanned: SpannedText<T, ParagraphStyle>,
    paragraphs: ParagraphCollection,
    runs: RunCollection,
    breaks: BreakTable,
    truncation_token: Option<TruncationToken>,
}

impl<T: Debug + TextStorage> Typesetter<T> {
    /// Creates a typesetter from its tables, checking that they agree on the
    /// length of the text.
    pub fn new(
        spanned: SpannedText<T, ParagraphStyle>,
        paragraphs: ParagraphCollection,
        runs: RunCollection,
        breaks: BreakTable,
    ) -> Result<Self, TypesetError> {
        let len = spanned.len();
        if paragraphs.char_end() != len {
            return Err(TypesetError::new(
                TypesetErrorKind::DiscontiguousParagraphs,
                paragraphs.len(),
                paragraphs.char_end()..len,
            ));
        }
        if runs.char_end() != len {
            return Err(TypesetError::new(
                TypesetErrorKind::DiscontiguousRuns,
                runs.len(),
                runs.char_end()..len,
            ));
        }
        if breaks.len() != len + 1 {
            return Err(TypesetError::new(
                TypesetErrorKind::BreakTableLength,
                breaks.len(),
                0..len,
            ));
        }
        Ok(Self {
            spanned,
            paragraphs,
            runs,
            breaks,
            truncation_token: None,
        })
    }

    /// Sets the token inserted by truncated lines.
    pub fn with_truncation_token(mut self, token: TruncationToken) -> Self {
        self.truncation_token = Some(token);
        self
    }

    /// Returns the styled text.
    pub fn spanned(&self) -> &SpannedText<T, ParagraphStyle> {
        &self.spanned
    }

    /// Returns the bidi paragraphs.
    pub fn paragraphs(&self) -> &ParagraphCollection {
        &self.paragraphs
    }

    /// Returns the shaped runs.
    pub fn runs(&self) -> &RunCollection {
        &self.runs
    }

    /// Returns the break table.
    pub fn breaks(&self) -> &BreakTable {
        &self.breaks
    }

    /// Returns the truncation token, if any.
    pub fn truncation_token(&self) -> Option<&TruncationToken> {
        self.truncation_token.as_ref()
    }

    /// Returns the length in bytes of the typeset text.
    pub fn text_len(&self) -> usize {
        self.spanned.len()
    }

    /// Returns a break picker over the runs and break table.
    pub fn break_picker(&self) -> BreakPicker<'_> {
        BreakPicker::new(&self.runs, &self.breaks)
    }

    /// Returns a line resolver over the paragraphs, runs and break table.
    pub fn line_resolver(&self) -> LineResolver<'_> {
        LineResolver::new(&self.paragraphs, &self.runs, &self.breaks)
    }

    /// Creates a line covering `char_range` without truncation.
    pub fn create_simple_line(&self, char_range: Range<usize>) -> ComposedLine {
        self.line_resolver().create_simple_line(char_range)
    }

    /// Creates a line covering `char_start..frame_end` whose visible content
    /// and truncation token fit `extent`.
    pub fn create_truncated_line(
        &self,
        char_start: usize,
        frame_end: usize,
        extent: f32,
        mode: BreakMode,
        place: TruncationPlace,
    ) -> ComposedLine {
        self.line_resolver().create_truncated_line(
            char_start..frame_end,
            extent,
            mode,
            place,
            self.truncation_token.as_ref(),
        )
    }
}

/// Error returned when typesetter tables are inconsistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypesetError {
    kind: TypesetErrorKind,
    index: usize,
    start: usize,
    end: usize,
}

impl TypesetError {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> TypesetErrorKind {
        self.kind
    }

    /// The position of the offending entry in its table.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The byte range involved in the inconsistency.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub(crate) fn new(kind: TypesetErrorKind, index: usize, range: Range<usize>) -> Self {
        Self {
            kind,
            index,
            start: range.start,
            end: range.end,
        }
    }
}

impl core::fmt::Display for TypesetError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            TypesetErrorKind::DiscontiguousParagraphs => write!(
                f,
                "paragraph {} at {}..{} leaves a gap in the text",
                self.index, self.start, self.end
            ),
            TypesetErrorKind::DiscontiguousRuns => write!(
                f,
                "run {} at {}..{} leaves a gap in the text",
                self.index, self.start, self.end
            ),
            TypesetErrorKind::InvalidAdvances => write!(
                f,
                "run {} at {}..{} needs one finite advance per byte",
                self.index, self.start, self.end
            ),
            TypesetErrorKind::BreakTableLength => write!(
                f,
                "break table has {} entries, text {}..{} needs {}",
                self.index,
                self.start,
                self.end,
                self.end + 1
            ),
        }
    }
}

impl core::error::Error for TypesetError {}

/// The non-exhaustive category of a [`TypesetError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum TypesetErrorKind {
    /// Paragraphs are empty, overlap, leave gaps or do not end with the text.
    DiscontiguousParagraphs,
    /// Runs are empty, overlap, leave gaps or do not end with the text.
    DiscontiguousRuns,
    /// A run does not carry one finite advance per byte.
    InvalidAdvances,
    /// The break table does not have one entry per byte boundary.
    BreakTableLength,
}
