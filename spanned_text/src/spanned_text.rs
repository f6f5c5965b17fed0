// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::Range;

use crate::{Endpoint, Error, ErrorKind, TextStorage};

/// Identifies a span by the order in which it was applied.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpanId(usize);

impl SpanId {
    /// Returns the position of the span in application order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A borrowed view of a single applied span.
#[derive(Debug)]
pub struct Span<'a, S> {
    id: SpanId,
    start: usize,
    end: usize,
    style: &'a S,
}

impl<S> Clone for Span<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Span<'_, S> {}

impl<'a, S> Span<'a, S> {
    /// Returns the identifier of the span.
    pub fn id(&self) -> SpanId {
        self.id
    }

    /// Returns the byte offset where the span begins.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the byte offset where the span ends (exclusive).
    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns the range covered by the span.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns the style carried by the span.
    pub fn style(&self) -> &'a S {
        self.style
    }
}

/// A block of text with style spans applied to ranges within the text.
#[derive(Debug)]
pub struct SpannedText<T: Debug + TextStorage, S: Debug> {
    text: T,
    spans: Vec<(Range<usize>, S)>,
}

impl<T: Debug + TextStorage, S: Debug> SpannedText<T, S> {
    /// Create a `SpannedText` with no spans applied.
    pub fn new(text: T) -> Self {
        Self {
            text,
            spans: Vec::new(),
        }
    }

    /// Borrow the underlying text storage.
    pub fn text(&self) -> &T {
        &self.text
    }

    /// Returns the length of the underlying text, in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the underlying text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Apply `style` to `range` within the text.
    ///
    /// The range must be ordered, in bounds and aligned to UTF-8 character
    /// boundaries.
    pub fn apply_span(&mut self, range: Range<usize>, style: S) -> Result<SpanId, Error> {
        let len = self.text.len();
        if range.start > range.end {
            return Err(Error::new(
                ErrorKind::InvalidRange,
                range.start,
                range.end,
                len,
            ));
        }
        if range.end > len {
            return Err(Error::new(
                ErrorKind::InvalidBounds,
                range.start,
                range.end,
                len,
            ));
        }
        if !self.text.is_char_boundary(range.start) {
            return Err(Error::not_on_char_boundary(
                range.start,
                range.end,
                len,
                Endpoint::Start,
            ));
        }
        if !self.text.is_char_boundary(range.end) {
            return Err(Error::not_on_char_boundary(
                range.start,
                range.end,
                len,
                Endpoint::End,
            ));
        }
        let id = SpanId(self.spans.len());
        self.spans.push((range, style));
        Ok(id)
    }

    /// Returns the span with the given identifier.
    pub fn span(&self, id: SpanId) -> Option<Span<'_, S>> {
        self.spans.get(id.0).map(|(range, style)| Span {
            id,
            start: range.start,
            end: range.end,
            style,
        })
    }

    /// Returns the byte offset where the span with the given identifier begins.
    pub fn span_start(&self, id: SpanId) -> Option<usize> {
        self.spans.get(id.0).map(|(range, _)| range.start)
    }

    /// Iterate over all spans in the order they were applied.
    pub fn spans(&self) -> impl ExactSizeIterator<Item = Span<'_, S>> + '_ {
        self.spans
            .iter()
            .enumerate()
            .map(|(index, (range, style))| Span {
                id: SpanId(index),
                start: range.start,
                end: range.end,
                style,
            })
    }

    /// Iterate over the spans overlapping `range`, in the order they were applied.
    ///
    /// A span overlaps when it shares at least one byte with `range`. An
    /// empty `range` selects the spans that contain its position.
    pub fn spans_intersecting(&self, range: Range<usize>) -> impl Iterator<Item = Span<'_, S>> + '_ {
        self.spans().filter(move |span| {
            if range.is_empty() {
                span.start <= range.start && range.start < span.end
            } else {
                span.start < range.end && span.end > range.start
            }
        })
    }

    /// Iterate over the spans that contain the byte at `index`.
    pub fn spans_at(&self, index: usize) -> impl Iterator<Item = Span<'_, S>> + '_ {
        self.spans()
            .filter(move |span| span.start <= index && index < span.end)
    }

    /// Returns the number of spans applied to the text.
    pub fn spans_len(&self) -> usize {
        self.spans.len()
    }

    /// Remove all applied spans.
    pub fn clear_spans(&mut self) {
        self.spans.clear();
    }
}
