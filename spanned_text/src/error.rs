// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Error returned when a span cannot be applied to the text.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the attempted range and the
/// text length, so callers can report exactly what was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    start: usize,
    end: usize,
    len: usize,
    endpoint: Option<Endpoint>,
}

#[expect(
    clippy::len_without_is_empty,
    reason = "`Error::len` reports source text length context; an `is_empty` method would be misleading and unused."
)]
impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The start byte index of the range provided by the caller.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The end byte index of the range provided by the caller.
    pub fn end(&self) -> usize {
        self.end
    }

    /// The length in bytes of the text the span was applied to.
    pub fn len(&self) -> usize {
        self.len
    }

    /// The endpoint that failed validation, for [`ErrorKind::NotOnCharBoundary`].
    pub fn endpoint(&self) -> Option<Endpoint> {
        self.endpoint
    }

    pub(crate) fn new(kind: ErrorKind, start: usize, end: usize, len: usize) -> Self {
        Self {
            kind,
            start,
            end,
            len,
            endpoint: None,
        }
    }

    pub(crate) fn not_on_char_boundary(
        start: usize,
        end: usize,
        len: usize,
        endpoint: Endpoint,
    ) -> Self {
        Self {
            endpoint: Some(endpoint),
            ..Self::new(ErrorKind::NotOnCharBoundary, start, end, len)
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::InvalidRange => {
                write!(f, "invalid span {}..{}: start > end", self.start, self.end)
            }
            ErrorKind::InvalidBounds => write!(
                f,
                "span {}..{} out of bounds for len {}",
                self.start, self.end, self.len
            ),
            ErrorKind::NotOnCharBoundary => {
                let (which, index) = match self.endpoint {
                    Some(Endpoint::End) => ("end", self.end),
                    _ => ("start", self.start),
                };
                write!(
                    f,
                    "span {}..{}: {} index {} not on UTF-8 boundary",
                    self.start, self.end, which, index
                )
            }
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The provided range had `start > end`.
    InvalidRange,

    /// Provided range indices were out of bounds relative to the text length.
    InvalidBounds,

    /// Either `start` or `end` was not aligned to a UTF-8 character boundary.
    NotOnCharBoundary,
}

/// Identifies which endpoint of a span range failed boundary validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The `start` endpoint of the range.
    Start,

    /// The `end` endpoint of the range.
    End,
}
