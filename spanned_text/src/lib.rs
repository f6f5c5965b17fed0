// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spanned Text pairs a block of text with style spans applied to byte ranges.
//!
//! Spans are kept in the order they were applied. Queries that report the
//! spans overlapping a range preserve that order, so later spans can be
//! treated as taking precedence over earlier ones.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
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
#![no_std]

extern crate alloc;

mod error;
mod spanned_text;
mod text_storage;

pub use crate::error::{Endpoint, Error, ErrorKind};
pub use crate::spanned_text::{Span, SpanId, SpannedText};
pub use crate::text_storage::TextStorage;
