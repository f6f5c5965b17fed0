// Copyright 2024 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::style::FontMetricsInt;
use crate::typesetter::RunMetrics;
use crate::util::round_half_up;

/// Metrics information for a line.
#[derive(Copy, Clone, Default, Debug, PartialEq)]
pub struct LineMetrics {
    /// Typographic ascent.
    pub ascent: f32,
    /// Typographic descent.
    pub descent: f32,
    /// Typographic leading.
    pub leading: f32,
    /// Full advance of the line.
    pub advance: f32,
    /// Advance of trailing whitespace.
    pub trailing_whitespace: f32,
}

impl LineMetrics {
    /// Returns the height of the line, `ascent + descent + leading`.
    pub fn height(&self) -> f32 {
        self.ascent + self.descent + self.leading
    }

    /// Grows the vertical metrics to cover `run`.
    pub(crate) fn include(&mut self, run: RunMetrics) {
        self.ascent = self.ascent.max(run.ascent);
        self.descent = self.descent.max(run.descent);
        self.leading = self.leading.max(run.leading);
    }

    /// Returns the horizontal distance from the leading edge of a box of
    /// width `extent` to the start of the line's content.
    ///
    /// Trailing whitespace hangs: it is not counted as content, and for
    /// right-to-left lines it sits before the content on the left.
    pub fn flush_pen_offset(&self, flush_factor: f32, extent: f32, is_rtl: bool) -> f32 {
        let content = self.advance - self.trailing_whitespace;
        let mut offset = if extent.is_finite() {
            (extent - content) * flush_factor
        } else {
            0.0
        };
        if is_rtl {
            offset -= self.trailing_whitespace;
        }
        offset
    }

    /// Returns the vertical metrics rounded to whole pixels.
    pub(crate) fn to_font_metrics(self) -> FontMetricsInt {
        FontMetricsInt {
            ascent: -round_half_up(self.ascent),
            descent: round_half_up(self.descent),
            leading: round_half_up(self.leading),
        }
    }

    /// Replaces the vertical metrics with chooser output.
    pub(crate) fn apply_font_metrics(&mut self, metrics: &FontMetricsInt) {
        self.ascent = -metrics.ascent as f32;
        self.descent = metrics.descent as f32;
        self.leading = metrics.leading as f32;
    }

    /// Scales the height by `multiplier`, keeping the text centered.
    ///
    /// Half of the change goes above the baseline and a quarter each to the
    /// descent and the leading.
    pub(crate) fn scale_height(&mut self, multiplier: f32) {
        let old_height = self.height();
        let difference = old_height * multiplier - old_height;
        self.ascent += difference / 2.0;
        self.descent += difference / 4.0;
        self.leading += difference / 4.0;
    }

    /// Clamps the vertical metrics to be non-negative.
    pub(crate) fn clamp_vertical(&mut self) {
        self.ascent = self.ascent.max(0.0);
        self.descent = self.descent.max(0.0);
        self.leading = self.leading.max(0.0);
    }
}
