// Copyright 2024 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use smallvec::SmallVec;

use super::{BreakPicker, ComposedLine, LineItem, LineMetrics};
use crate::typesetter::{
    BreakMode, BreakTable, ParagraphCollection, RunCollection, TruncationPlace, TruncationToken,
};

/// Builds composed lines from the typesetter tables.
#[derive(Copy, Clone, Debug)]
pub struct LineResolver<'a> {
    paragraphs: &'a ParagraphCollection,
    runs: &'a RunCollection,
    breaks: &'a BreakTable,
}

impl<'a> LineResolver<'a> {
    /// Creates a resolver over the given tables.
    pub fn new(
        paragraphs: &'a ParagraphCollection,
        runs: &'a RunCollection,
        breaks: &'a BreakTable,
    ) -> Self {
        Self {
            paragraphs,
            runs,
            breaks,
        }
    }

    /// Creates a line showing all of `char_range`.
    pub fn create_simple_line(&self, char_range: Range<usize>) -> ComposedLine {
        let mut builder = LineBuilder::new(self.paragraph_level(char_range.start));
        self.push_text(&mut builder, char_range.clone());
        builder.metrics.trailing_whitespace = self.trailing_whitespace(char_range.clone());
        builder.finish(char_range)
    }

    /// Creates a line covering `char_range` whose visible content plus the
    /// truncation token fits `extent`.
    ///
    /// The line reports the whole of `char_range` as covered. Visible pieces
    /// never leave the paragraph their side of the range starts in.
    pub fn create_truncated_line(
        &self,
        char_range: Range<usize>,
        extent: f32,
        mode: BreakMode,
        place: TruncationPlace,
        token: Option<&TruncationToken>,
    ) -> ComposedLine {
        let Range { start, end } = char_range;
        let picker = BreakPicker::new(self.runs, self.breaks);
        let level = self.paragraph_level(start);
        let budget = extent - token.map_or(0.0, |token| token.advance);
        // Visible content stays inside the paragraph of the anchoring side.
        let head_limit = self
            .paragraphs
            .find(start)
            .map_or(end, |paragraph| paragraph.char_end().min(end));
        let tail_limit = self
            .paragraphs
            .find(end.saturating_sub(1))
            .map_or(start, |paragraph| paragraph.char_start().max(start));

        let mut builder = LineBuilder::new(level);
        match place {
            TruncationPlace::End => {
                let head = picker.suggest_forward_truncation_break(start, head_limit, budget, mode);
                let head = self.trim_trailing_whitespace(start..head);
                self.push_text(&mut builder, start..head);
                builder.push_token(token, level);
            }
            TruncationPlace::Start => {
                let tail = picker.suggest_backward_break(tail_limit, end, budget, mode);
                let tail = self.skip_leading_whitespace(tail..end);
                builder.push_token(token, level);
                self.push_text(&mut builder, tail..end);
                builder.metrics.trailing_whitespace = self.trailing_whitespace(tail..end);
            }
            TruncationPlace::Middle => {
                let head =
                    picker.suggest_forward_truncation_break(start, head_limit, budget / 2.0, mode);
                let head = self.trim_trailing_whitespace(start..head);
                let remaining = budget - self.runs.advance(start..head);
                let tail = picker.suggest_backward_break(tail_limit.max(head), end, remaining, mode);
                let tail = self.skip_leading_whitespace(tail..end);
                self.push_text(&mut builder, start..head);
                builder.push_token(token, level);
                self.push_text(&mut builder, tail..end);
                builder.metrics.trailing_whitespace = self.trailing_whitespace(tail..end);
            }
        }
        log::trace!("truncated {start}..{end} at {place:?} to fit {extent}");
        builder.finish(start..end)
    }

    fn paragraph_level(&self, char_index: usize) -> u8 {
        self.paragraphs
            .find(char_index)
            .map_or(0, |paragraph| paragraph.base_level())
    }

    fn push_text(&self, builder: &mut LineBuilder, char_range: Range<usize>) {
        for run in self.runs.intersecting(char_range.clone()) {
            let run_range = run.char_range();
            let start = char_range.start.max(run_range.start);
            let end = char_range.end.min(run_range.end);
            let advance = run.advance(start..end);
            builder.metrics.include(run.metrics());
            builder.metrics.advance += advance;
            builder.items.push(LineItem::Text {
                char_range: start..end,
                bidi_level: run.bidi_level(),
                advance,
            });
        }
    }

    fn trailing_whitespace(&self, char_range: Range<usize>) -> f32 {
        self.runs
            .advances(char_range)
            .rev()
            .take_while(|(index, _)| self.breaks.is_whitespace(*index))
            .map(|(_, advance)| advance)
            .sum()
    }

    fn trim_trailing_whitespace(&self, char_range: Range<usize>) -> usize {
        let mut end = char_range.end;
        while end > char_range.start && self.breaks.is_whitespace(end - 1) {
            end -= 1;
        }
        end
    }

    fn skip_leading_whitespace(&self, char_range: Range<usize>) -> usize {
        let mut start = char_range.start;
        while start < char_range.end && self.breaks.is_whitespace(start) {
            start += 1;
        }
        start
    }
}

struct LineBuilder {
    paragraph_level: u8,
    metrics: LineMetrics,
    items: SmallVec<[LineItem; 2]>,
}

impl LineBuilder {
    fn new(paragraph_level: u8) -> Self {
        Self {
            paragraph_level,
            metrics: LineMetrics::default(),
            items: SmallVec::new(),
        }
    }

    fn push_token(&mut self, token: Option<&TruncationToken>, bidi_level: u8) {
        let Some(token) = token else {
            return;
        };
        self.metrics.include(token.metrics);
        self.metrics.advance += token.advance;
        self.items.push(LineItem::Token {
            glyph: token.glyph,
            bidi_level,
            advance: token.advance,
        });
    }

    fn finish(mut self, char_range: Range<usize>) -> ComposedLine {
        reorder_line_items(&mut self.items);
        ComposedLine::new(char_range, self.paragraph_level, self.metrics, self.items)
    }
}

/// Reorder items within line according to the bidi levels of the items
fn reorder_line_items(items: &mut [LineItem]) {
    let item_count = items.len();

    // Find the max level and the min *odd* level
    let mut max_level = 0;
    let mut lowest_odd_level = 255;
    for item in items.iter() {
        let level = item.bidi_level();
        let is_odd = level & 1 != 0;

        if level > max_level {
            max_level = level;
        }
        if is_odd && level < lowest_odd_level {
            lowest_odd_level = level;
        }
    }

    // Reverse every maximal sequence at or above each level, highest first
    for level in (lowest_odd_level..=max_level).rev() {
        let mut i = 0;
        while i < item_count {
            if items[i].bidi_level() >= level {
                let mut end = i + 1;
                while end < item_count && items[end].bidi_level() >= level {
                    end += 1;
                }
                items[i..end].reverse();
                i = end;
            }
            i += 1;
        }
    }
}
