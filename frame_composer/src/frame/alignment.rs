// Copyright 2024 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Default horizontal alignment of a frame's lines.
///
/// Paragraphs carrying a [`ParagraphAlignment`](crate::ParagraphAlignment)
/// style override this.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum TextAlignment {
    /// Align content to the left edge.
    ///
    /// For alignment that should be aware of text direction, use
    /// [`TextAlignment::Intrinsic`] or [`TextAlignment::Extrinsic`] instead.
    Left,
    /// Align content to the right edge.
    ///
    /// For alignment that should be aware of text direction, use
    /// [`TextAlignment::Intrinsic`] or [`TextAlignment::Extrinsic`] instead.
    Right,
    /// Align each line centered within the frame.
    Center,
    /// This is [`TextAlignment::Left`] for LTR text and [`TextAlignment::Right`] for RTL text.
    #[default]
    Intrinsic,
    /// This is [`TextAlignment::Right`] for LTR text and [`TextAlignment::Left`] for RTL text.
    Extrinsic,
}

impl TextAlignment {
    /// Returns the fraction of slack space placed before a line of a
    /// paragraph with the given direction.
    pub fn flush_factor(self, is_rtl: bool) -> f32 {
        match (self, is_rtl) {
            (Self::Left, _) | (Self::Intrinsic, false) | (Self::Extrinsic, true) => 0.0,
            (Self::Right, _) | (Self::Intrinsic, true) | (Self::Extrinsic, false) => 1.0,
            (Self::Center, _) => 0.5,
        }
    }
}

/// Placement of the lines within the unused height of a frame.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum VerticalAlignment {
    /// Lines start at the top of the frame.
    #[default]
    Top,
    /// Lines are centered vertically.
    Middle,
    /// Lines end at the bottom of the frame.
    Bottom,
}

impl VerticalAlignment {
    /// Returns the fraction of unused height placed above the first line.
    pub fn multiplier(self) -> f32 {
        match self {
            Self::Top => 0.0,
            Self::Middle => 0.5,
            Self::Bottom => 1.0,
        }
    }
}
