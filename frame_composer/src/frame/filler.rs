// Copyright 2024 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The paragraph by paragraph walk that fills a frame with lines.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::Range;

use smallvec::SmallVec;
use spanned_text::TextStorage;

use super::{ComposedFrame, FrameRect, FrameSettings};
use crate::line::ComposedLine;
use crate::style::{ParagraphStyle, StyleQuery, StyleSpan};
use crate::typesetter::{BreakMode, Typesetter};
use crate::util::{nearly_zero, round_half_up};

/// The part of a bidi paragraph inside the requested range.
struct Paragraph<'a> {
    char_range: Range<usize>,
    base_level: u8,
    spans: SmallVec<[StyleSpan<'a>; 4]>,
    /// Rounded pen position when the paragraph was entered.
    top: i32,
}

impl Paragraph<'_> {
    fn is_rtl(&self) -> bool {
        self.base_level & 1 != 0
    }
}

/// Placement state shared by consecutive lines of a paragraph.
#[derive(Copy, Clone, Debug)]
struct LineContext {
    paragraph: usize,
    flush_factor: f32,
    line_extent: f32,
    leading_offset: f32,
}

/// Single use state of one `create_frame` call.
pub(super) struct FrameFiller<'a, T: Debug + TextStorage> {
    typesetter: &'a Typesetter<T>,
    settings: &'a FrameSettings,
    origin: (f32, f32),
    layout_width: f32,
    layout_height: f32,
    max_lines: usize,
    paragraphs: Vec<Paragraph<'a>>,
    lines: Vec<ComposedLine>,
    /// Context of each line, reused to rebuild it when truncating.
    contexts: Vec<LineContext>,
    line_y: f32,
    filled: bool,
}

impl<'a, T: Debug + TextStorage> FrameFiller<'a, T> {
    pub(super) fn new(
        typesetter: &'a Typesetter<T>,
        settings: &'a FrameSettings,
        frame_rect: FrameRect,
    ) -> Self {
        let unbounded = |extent: f32| {
            if extent > 0.0 {
                extent
            } else {
                f32::INFINITY
            }
        };
        Self {
            typesetter,
            settings,
            origin: (frame_rect.x, frame_rect.y),
            layout_width: unbounded(frame_rect.width),
            layout_height: unbounded(frame_rect.height),
            max_lines: match settings.max_lines {
                0 => usize::MAX,
                max_lines => max_lines,
            },
            paragraphs: Vec::new(),
            lines: Vec::new(),
            contexts: Vec::new(),
            line_y: 0.0,
            filled: false,
        }
    }

    /// Fills the frame with the lines of `char_range` and aligns them.
    pub(super) fn compose(mut self, char_range: Range<usize>) -> ComposedFrame {
        let Range {
            start: frame_start,
            end: frame_end,
        } = char_range;
        let typesetter = self.typesetter;
        let paragraphs = typesetter.paragraphs();
        let mut char_start = frame_start;
        let mut segment_end = frame_start;
        let mut paragraph_index = paragraphs.binary_search(char_start).unwrap_or(paragraphs.len());

        while char_start < frame_end {
            let Some(paragraph) = paragraphs.get(paragraph_index) else {
                break;
            };
            segment_end = frame_end.min(paragraph.char_end());
            let spans =
                StyleQuery::spans_intersecting(typesetter.spanned(), char_start..segment_end, None);
            log::trace!(
                "paragraph {paragraph_index} at {char_start}..{segment_end}, level {}, {} styles",
                paragraph.base_level(),
                spans.len()
            );
            self.paragraphs.push(Paragraph {
                char_range: char_start..segment_end,
                base_level: paragraph.base_level(),
                spans,
                top: round_half_up(self.line_y),
            });
            self.add_paragraph_lines(self.paragraphs.len() - 1);
            if self.filled {
                break;
            }
            char_start = segment_end;
            paragraph_index += 1;
        }

        self.handle_truncation(frame_end);
        self.resolve_alignments();

        ComposedFrame::new(
            frame_start..segment_end,
            self.origin,
            (self.layout_width, self.layout_height),
            self.lines,
        )
    }

    fn add_paragraph_lines(&mut self, paragraph_index: usize) {
        let paragraph = &self.paragraphs[paragraph_index];
        let mut leading_line_count = 1;
        let mut leading_margin = 0.0;
        let mut trailing_margin = 0.0;
        for span in &paragraph.spans {
            if let ParagraphStyle::LeadingMargin(margin) = span.style() {
                leading_margin += margin.first_line;
                trailing_margin += margin.rest;
                leading_line_count = leading_line_count.max(margin.line_count);
            }
        }

        let is_rtl = paragraph.is_rtl();
        let flush_factor = paragraph
            .spans
            .iter()
            .rev()
            .find_map(|span| match span.style() {
                ParagraphStyle::Alignment(alignment) => Some(alignment.flush_factor(is_rtl)),
                _ => None,
            })
            .unwrap_or_else(|| self.settings.text_alignment.flush_factor(is_rtl));
        let Range {
            start: mut line_start,
            end: segment_end,
        } = paragraph.char_range.clone();

        let mut context = LineContext {
            paragraph: paragraph_index,
            flush_factor,
            line_extent: self.layout_width - leading_margin,
            leading_offset: leading_offset(leading_margin, is_rtl),
        };
        let typesetter = self.typesetter;
        let picker = typesetter.break_picker();

        while line_start != segment_end {
            let line_end = picker.suggest_forward_break(
                line_start,
                segment_end,
                context.line_extent,
                BreakMode::Line,
            );
            let mut line = typesetter.create_simple_line(line_start..line_end);
            self.prepare_line(&mut line, &context);
            let line_height = line.height();

            // The first line is kept even if the frame is too short for it.
            if self.line_y + line_height > self.layout_height {
                if !self.lines.is_empty() {
                    log::trace!("frame filled before line {line_start}..{line_end}");
                    self.filled = true;
                    return;
                }
                log::warn!(
                    "line {line_start}..{line_end} of height {line_height} overflows frame height {}",
                    self.layout_height
                );
            }

            log::trace!(
                "line {line_start}..{line_end} at ({}, {}) within {}",
                line.origin_x(),
                line.origin_y(),
                context.line_extent
            );
            self.lines.push(line);
            self.contexts.push(context);

            if self.lines.len() == self.max_lines {
                self.filled = true;
                return;
            }

            leading_line_count = leading_line_count.saturating_sub(1);
            if leading_line_count == 0 {
                context.line_extent = self.layout_width - trailing_margin;
                context.leading_offset = leading_offset(trailing_margin, is_rtl);
            }

            line_start = line_end;
            self.line_y += line_height;
        }
    }

    /// Applies metric overrides and positions `line` at the pen.
    fn prepare_line(&self, line: &mut ComposedLine, context: &LineContext) {
        let paragraph = &self.paragraphs[context.paragraph];
        let spanned = self.typesetter.spanned();

        for span in &paragraph.spans {
            let ParagraphStyle::LineHeight(line_height) = span.style() else {
                continue;
            };
            let mut metrics = line.metrics().to_font_metrics();
            let line_top = round_half_up(self.line_y);
            let span_start = spanned.span_start_of(span);
            let span_top = if span_start < paragraph.char_range.start {
                // The span began in an earlier paragraph; a start before the
                // frame resolves to the frame top.
                self.line_index_for_char(span_start)
                    .map_or(0, |index| round_half_up(self.lines[index].top()))
            } else {
                paragraph.top
            };
            line_height.chooser().choose_height(
                spanned.text().as_str(),
                line.char_range(),
                span_top,
                line_top,
                &mut metrics,
            );
            line.metrics_mut().apply_font_metrics(&metrics);
        }

        let multiplier = self.settings.line_height_multiplier;
        if !nearly_zero(multiplier) {
            line.metrics_mut().scale_height(multiplier);
        }
        let extra_line_spacing = self.settings.extra_line_spacing;
        if !nearly_zero(extra_line_spacing) {
            line.metrics_mut().leading += extra_line_spacing;
        }
        line.metrics_mut().clamp_vertical();

        let origin_x =
            context.leading_offset + line.flush_pen_offset(context.flush_factor, context.line_extent);
        let origin_y = self.line_y + line.ascent();
        line.set_origin(origin_x, origin_y);
    }

    fn line_index_for_char(&self, char_index: usize) -> Option<usize> {
        let index = self
            .lines
            .partition_point(|line| line.char_end() <= char_index);
        let line = self.lines.get(index)?;
        (line.char_start() <= char_index).then_some(index)
    }

    /// Replaces the last line with a truncated one when the lines stop short
    /// of `frame_end`.
    ///
    /// A truncated line taller than the line it replaces may not fit the
    /// frame height; it then replaces the line above instead, down to the
    /// first line.
    fn handle_truncation(&mut self, frame_end: usize) {
        let Some(place) = self.settings.truncation_place else {
            return;
        };
        match self.lines.last() {
            Some(last) if last.char_end() != frame_end => {}
            _ => return,
        }

        loop {
            let (Some(last), Some(&context)) = (self.lines.last(), self.contexts.last()) else {
                return;
            };
            let line_start = last.char_start();
            self.line_y = last.top();
            let mut truncated = self.typesetter.create_truncated_line(
                line_start,
                frame_end,
                context.line_extent,
                self.settings.truncation_mode,
                place,
            );
            self.prepare_line(&mut truncated, &context);

            if self.lines.len() > 1 && truncated.bottom() > self.layout_height {
                log::trace!(
                    "truncated line {line_start}..{frame_end} overflows frame height {}",
                    self.layout_height
                );
                self.lines.pop();
                self.contexts.pop();
                continue;
            }

            log::trace!(
                "truncated last line {line_start}..{frame_end} at {place:?}, extent {}",
                truncated.extent()
            );
            if let Some(last) = self.lines.last_mut() {
                *last = truncated;
            }
            return;
        }
    }

    /// Shifts the lines into the unused height and resolves unbounded axes.
    fn resolve_alignments(&mut self) {
        let occupied = self.lines.last().map_or(0.0, ComposedLine::bottom);
        if self.layout_height.is_infinite() {
            self.layout_height = occupied;
        }
        if self.layout_width.is_infinite() {
            self.layout_width = self
                .lines
                .iter()
                .map(ComposedLine::content_right)
                .fold(0.0, f32::max);
        }

        let dy = (self.layout_height - occupied) * self.settings.vertical_alignment.multiplier();
        if nearly_zero(dy) {
            return;
        }
        for line in &mut self.lines {
            line.offset_y(dy);
        }
    }
}

/// Returns the x shift applied to the lines of a paragraph so that the
/// leading margin is left empty.
///
/// Right-to-left lines are not shifted. Their extent is measured from the
/// left edge, so the margin is left empty on the right.
fn leading_offset(margin: f32, is_rtl: bool) -> f32 {
    if is_rtl {
        0.0
    } else {
        margin
    }
}
