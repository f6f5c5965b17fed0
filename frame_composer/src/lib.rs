// Copyright 2021 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame composition for pre-typeset text.
//!
//! A [`Typesetter`] carries the output of an earlier shaping stage: the text
//! and its paragraph styles, bidi paragraphs, shaped runs and a break table.
//! A [`FrameResolver`] borrows a typesetter and fills a rectangular frame
//! with [`ComposedLine`]s, honoring horizontal and vertical alignment,
//! leading margins, line height overrides, a line count cap and truncation
//! of overflowing content.
//!
//! ```
//! use frame_composer::{
//!     BidiParagraph, BreakFlags, BreakTable, FrameRect, FrameResolver, ParagraphCollection,
//!     RunCollection, RunMetrics, ShapedRun, SpannedText, Typesetter,
//! };
//!
//! let text = "Hello world";
//! let metrics = RunMetrics { ascent: 8.0, descent: 2.0, leading: 0.0 };
//! let runs = RunCollection::new(vec![ShapedRun::new(0..text.len(), 0, metrics, vec![10.0; text.len()])])?;
//! let paragraphs = ParagraphCollection::new(vec![BidiParagraph::new(0..text.len(), 0)])?;
//! let mut flags = vec![BreakFlags::CHARACTER; text.len() + 1];
//! flags[6] |= BreakFlags::LINE;
//! flags[5] |= BreakFlags::WHITESPACE;
//! flags[text.len()] |= BreakFlags::LINE;
//! let breaks = BreakTable::new(flags);
//!
//! let typesetter = Typesetter::new(SpannedText::new(text), paragraphs, runs, breaks)?;
//! let mut resolver = FrameResolver::new(&typesetter);
//! resolver.set_frame_rect(FrameRect::new(0.0, 0.0, 80.0, 0.0));
//!
//! let frame = resolver.create_frame(0..text.len())?;
//! assert_eq!(frame.len(), 2);
//! assert_eq!(frame.lines()[0].char_range(), 0..6);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): Use the standard library for float math.
//! - `libm`: Use `core_maths` for float math in `no_std` builds.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("frame_composer requires either the `std` or `libm` feature to be enabled");

extern crate alloc;

pub use spanned_text;

mod error;
mod util;

pub mod frame;
pub mod line;
pub mod style;
pub mod typesetter;

#[cfg(test)]
mod tests;

pub use error::{ErrorKind, FrameError};
pub use frame::{
    ComposedFrame, FrameRect, FrameResolver, TextAlignment, VerticalAlignment,
};
pub use line::{BreakPicker, ComposedLine, LineItem, LineMetrics, LineResolver};
pub use spanned_text::SpannedText;
pub use style::{
    FontMetricsInt, LeadingMargin, LineHeightChooser, LineHeightSpan, ParagraphAlignment,
    ParagraphStyle, StyleKind, StyleQuery, StyleSpan,
};
pub use typesetter::{
    BidiParagraph, BreakFlags, BreakMode, BreakTable, ParagraphCollection, RunCollection,
    RunMetrics, ShapedRun, TruncationPlace, TruncationToken, TypesetError, TypesetErrorKind,
    Typesetter,
};
