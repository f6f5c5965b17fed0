// Copyright 2024 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Filling rectangular frames with composed lines.

mod alignment;
mod composed;
mod filler;

use core::fmt::Debug;
use core::ops::Range;

use spanned_text::TextStorage;

use crate::error::{ErrorKind, FrameError};
use crate::typesetter::{BreakMode, TruncationPlace, Typesetter};
use filler::FrameFiller;

pub use alignment::{TextAlignment, VerticalAlignment};
pub use composed::{ComposedFrame, FrameRect};

/// Options that persist across frames.
#[derive(Copy, Clone, Debug, PartialEq)]
struct FrameSettings {
    text_alignment: TextAlignment,
    vertical_alignment: VerticalAlignment,
    truncation_mode: BreakMode,
    truncation_place: Option<TruncationPlace>,
    max_lines: usize,
    extra_line_spacing: f32,
    line_height_multiplier: f32,
}

impl Default for FrameSettings {
    fn default() -> Self {
        Self {
            text_alignment: TextAlignment::Intrinsic,
            vertical_alignment: VerticalAlignment::Top,
            truncation_mode: BreakMode::Line,
            truncation_place: Some(TruncationPlace::End),
            max_lines: 0,
            extra_line_spacing: 0.0,
            line_height_multiplier: 0.0,
        }
    }
}

/// Composes frames of lines out of a borrowed [`Typesetter`].
///
/// The resolver holds the frame configuration; every call to
/// [`create_frame`](Self::create_frame) starts from scratch, so one resolver
/// can compose any number of frames.
#[derive(Debug)]
pub struct FrameResolver<'t, T: Debug + TextStorage> {
    typesetter: &'t Typesetter<T>,
    frame_rect: Option<FrameRect>,
    settings: FrameSettings,
}

impl<'t, T: Debug + TextStorage> Clone for FrameResolver<'t, T> {
    fn clone(&self) -> Self {
        Self {
            typesetter: self.typesetter,
            frame_rect: self.frame_rect,
            settings: self.settings,
        }
    }
}

impl<'t, T: Debug + TextStorage> FrameResolver<'t, T> {
    /// Creates a resolver with default settings and no frame rect.
    pub fn new(typesetter: &'t Typesetter<T>) -> Self {
        Self {
            typesetter,
            frame_rect: None,
            settings: FrameSettings::default(),
        }
    }

    /// Returns the typesetter lines are composed from.
    pub fn typesetter(&self) -> &'t Typesetter<T> {
        self.typesetter
    }

    /// Composes later frames from `typesetter`.
    pub fn set_typesetter(&mut self, typesetter: &'t Typesetter<T>) {
        self.typesetter = typesetter;
    }

    /// Returns the frame rect, if one was set.
    pub fn frame_rect(&self) -> Option<FrameRect> {
        self.frame_rect
    }

    /// Sets the rectangle frames are composed into.
    ///
    /// A non-positive width or height leaves that axis unbounded.
    pub fn set_frame_rect(&mut self, frame_rect: FrameRect) {
        self.frame_rect = Some(frame_rect);
    }

    /// Returns the default horizontal alignment.
    pub fn text_alignment(&self) -> TextAlignment {
        self.settings.text_alignment
    }

    /// Sets the horizontal alignment of paragraphs without an alignment style.
    pub fn set_text_alignment(&mut self, text_alignment: TextAlignment) {
        self.settings.text_alignment = text_alignment;
    }

    /// Returns the vertical alignment.
    pub fn vertical_alignment(&self) -> VerticalAlignment {
        self.settings.vertical_alignment
    }

    /// Sets where the lines sit within the unused height of the frame.
    pub fn set_vertical_alignment(&mut self, vertical_alignment: VerticalAlignment) {
        self.settings.vertical_alignment = vertical_alignment;
    }

    /// Returns the break mode used when truncating.
    pub fn truncation_mode(&self) -> BreakMode {
        self.settings.truncation_mode
    }

    /// Sets whether truncation cuts at line break opportunities or at any
    /// character boundary.
    pub fn set_truncation_mode(&mut self, truncation_mode: BreakMode) {
        self.settings.truncation_mode = truncation_mode;
    }

    /// Returns where overflowing content is truncated, if at all.
    pub fn truncation_place(&self) -> Option<TruncationPlace> {
        self.settings.truncation_place
    }

    /// Sets where the last line is truncated when content does not fit.
    /// `None` disables truncation.
    pub fn set_truncation_place(&mut self, truncation_place: Option<TruncationPlace>) {
        self.settings.truncation_place = truncation_place;
    }

    /// Returns the line cap; zero means unlimited.
    pub fn max_lines(&self) -> usize {
        self.settings.max_lines
    }

    /// Caps the number of lines in a frame. Zero removes the cap.
    pub fn set_max_lines(&mut self, max_lines: usize) {
        self.settings.max_lines = max_lines;
    }

    /// Returns the spacing added to the leading of every line.
    pub fn extra_line_spacing(&self) -> f32 {
        self.settings.extra_line_spacing
    }

    /// Sets the spacing added to the leading of every line.
    pub fn set_extra_line_spacing(&mut self, extra_line_spacing: f32) {
        debug_assert!(extra_line_spacing.is_finite(), "non-finite line spacing");
        self.settings.extra_line_spacing = extra_line_spacing;
    }

    /// Returns the line height multiplier; zero means disabled.
    pub fn line_height_multiplier(&self) -> f32 {
        self.settings.line_height_multiplier
    }

    /// Scales the height of every line, keeping its text centered. Zero
    /// disables scaling.
    pub fn set_line_height_multiplier(&mut self, line_height_multiplier: f32) {
        debug_assert!(
            line_height_multiplier.is_finite(),
            "non-finite line height multiplier"
        );
        self.settings.line_height_multiplier = line_height_multiplier;
    }

    /// Composes the bytes of `char_range` into a frame.
    ///
    /// Lines are added paragraph by paragraph until the range is exhausted,
    /// the frame is full or the line cap is reached. At least one line is
    /// always added for a non-empty range. An empty range yields an empty
    /// frame.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidConfiguration`] if no frame rect is set or
    /// `char_range` is reversed, and [`ErrorKind::OutOfRange`] if it extends
    /// past the typeset text or splits a character.
    pub fn create_frame(&self, char_range: Range<usize>) -> Result<ComposedFrame, FrameError> {
        let len = self.typesetter.text_len();
        let Some(frame_rect) = self.frame_rect else {
            return Err(FrameError::new(
                ErrorKind::InvalidConfiguration,
                &char_range,
                len,
            ));
        };
        if char_range.start > char_range.end {
            return Err(FrameError::new(
                ErrorKind::InvalidConfiguration,
                &char_range,
                len,
            ));
        }
        let text = self.typesetter.spanned().text();
        if char_range.end > len
            || !text.is_char_boundary(char_range.start)
            || !text.is_char_boundary(char_range.end)
        {
            return Err(FrameError::new(ErrorKind::OutOfRange, &char_range, len));
        }

        let frame = FrameFiller::new(self.typesetter, &self.settings, frame_rect)
            .compose(char_range.clone());
        log::debug!(
            "composed {}..{} into {} lines, {}x{} at ({}, {})",
            char_range.start,
            char_range.end,
            frame.len(),
            frame.width(),
            frame.height(),
            frame.origin_x(),
            frame.origin_y()
        );
        Ok(frame)
    }
}
