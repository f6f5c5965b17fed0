// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// Error returned by [`FrameResolver::create_frame`].
///
/// Carries a non-exhaustive [`ErrorKind`] plus the requested range and the
/// length of the typeset text.
///
/// [`FrameResolver::create_frame`]: crate::FrameResolver::create_frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameError {
    kind: ErrorKind,
    start: usize,
    end: usize,
    len: usize,
}

#[expect(
    clippy::len_without_is_empty,
    reason = "`FrameError::len` reports source text length context; an `is_empty` method would be misleading and unused."
)]
impl FrameError {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The start of the range passed to `create_frame`.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The end of the range passed to `create_frame`.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The length in bytes of the typeset text.
    pub fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn new(kind: ErrorKind, range: &Range<usize>, len: usize) -> Self {
        Self {
            kind,
            start: range.start,
            end: range.end,
            len,
        }
    }
}

impl core::fmt::Display for FrameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::InvalidConfiguration if self.start > self.end => {
                write!(f, "invalid range {}..{}: start > end", self.start, self.end)
            }
            ErrorKind::InvalidConfiguration => write!(
                f,
                "cannot compose {}..{}: frame rect is not set",
                self.start, self.end
            ),
            ErrorKind::OutOfRange => write!(
                f,
                "range {}..{} out of range for typeset text of len {}",
                self.start, self.end, self.len
            ),
        }
    }
}

impl core::error::Error for FrameError {}

/// The non-exhaustive category of a [`FrameError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The resolver has no frame rect, or the requested range had `start > end`.
    InvalidConfiguration,

    /// The requested range extends beyond the typeset text or splits a character.
    OutOfRange,
}
