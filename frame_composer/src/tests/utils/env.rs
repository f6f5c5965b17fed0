// Copyright 2024 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::string::String;
use std::vec;
use std::vec::Vec;

use core::ops::Range;

use unicode_bidi::{BidiInfo, Level};

use crate::{
    BidiParagraph, BreakFlags, BreakTable, FrameRect, FrameResolver, ParagraphCollection,
    ParagraphStyle, RunCollection, RunMetrics, ShapedRun, SpannedText, TruncationToken,
    Typesetter,
};

/// Pen advance of every character except `\n`.
const ADVANCE: f32 = 10.0;

/// Metrics of every run unless overridden.
const METRICS: RunMetrics = RunMetrics {
    ascent: 8.0,
    descent: 2.0,
    leading: 0.0,
};

/// `len` characters cycling through the alphabet, without break opportunities.
pub(crate) fn letters(len: usize) -> String {
    (b'a'..=b'z').cycle().take(len).map(char::from).collect()
}

/// `len` characters of nine letter words, each followed by a space.
pub(crate) fn words(len: usize) -> String {
    "abcdefghi ".chars().cycle().take(len).collect()
}

/// Builds typesetters for a fixed-width test font.
///
/// Every character advances [`ADVANCE`] except `\n`, which is zero width.
/// Lines may break after spaces and must break after `\n`. Paragraphs and
/// bidi levels come from `unicode-bidi`.
pub(crate) struct TestEnv {
    text: String,
    base_level: Option<Level>,
    styles: Vec<(Range<usize>, ParagraphStyle)>,
    metrics: Vec<(Range<usize>, RunMetrics)>,
    token: Option<TruncationToken>,
}

impl TestEnv {
    pub(crate) fn new(text: &str) -> Self {
        Self {
            text: text.into(),
            base_level: None,
            styles: Vec::new(),
            metrics: Vec::new(),
            token: Some(TruncationToken::ellipsis(ADVANCE, METRICS)),
        }
    }

    /// Forces right-to-left paragraphs.
    pub(crate) fn rtl(mut self) -> Self {
        self.base_level = Some(Level::rtl());
        self
    }

    /// Forces left-to-right paragraphs.
    pub(crate) fn ltr(mut self) -> Self {
        self.base_level = Some(Level::ltr());
        self
    }

    pub(crate) fn without_token(mut self) -> Self {
        self.token = None;
        self
    }

    pub(crate) fn style(mut self, range: Range<usize>, style: ParagraphStyle) -> Self {
        self.styles.push((range, style));
        self
    }

    /// Uses `metrics` for the runs covering `range`.
    pub(crate) fn metrics(mut self, range: Range<usize>, metrics: RunMetrics) -> Self {
        self.metrics.push((range, metrics));
        self
    }

    /// Replaces the default ellipsis.
    pub(crate) fn token(mut self, token: TruncationToken) -> Self {
        self.token = Some(token);
        self
    }

    pub(crate) fn build(&self) -> Typesetter<String> {
        let text = self.text.as_str();
        let bidi = BidiInfo::new(text, self.base_level);

        let paragraphs = bidi
            .paragraphs
            .iter()
            .map(|info| BidiParagraph::new(info.range.clone(), info.level.number()))
            .collect();

        let mut runs = Vec::new();
        let mut run_start = 0;
        let mut advances = Vec::new();
        for index in 0..text.len() {
            let key = |index: usize| (bidi.levels[index].number(), self.metrics_at(index));
            if index > run_start && key(index) != key(run_start) {
                runs.push(ShapedRun::new(
                    run_start..index,
                    bidi.levels[run_start].number(),
                    self.metrics_at(run_start),
                    core::mem::take(&mut advances),
                ));
                run_start = index;
            }
            let starts_char = text.is_char_boundary(index);
            let is_newline = text.as_bytes()[index] == b'\n';
            advances.push(if starts_char && !is_newline {
                ADVANCE
            } else {
                0.0
            });
        }
        if run_start < text.len() {
            runs.push(ShapedRun::new(
                run_start..text.len(),
                bidi.levels[run_start].number(),
                self.metrics_at(run_start),
                advances,
            ));
        }

        let mut flags = vec![BreakFlags::NONE; text.len() + 1];
        for (index, ch) in text.char_indices() {
            flags[index] |= BreakFlags::CHARACTER;
            if ch.is_whitespace() {
                for flag in &mut flags[index..index + ch.len_utf8()] {
                    *flag |= BreakFlags::WHITESPACE;
                }
            }
            let next = index + ch.len_utf8();
            match ch {
                '\n' => flags[next] |= BreakFlags::LINE | BreakFlags::MANDATORY,
                ' ' => flags[next] |= BreakFlags::LINE,
                _ => {}
            }
        }
        flags[text.len()] |= BreakFlags::CHARACTER | BreakFlags::LINE;

        let mut spanned = SpannedText::new(self.text.clone());
        for (range, style) in &self.styles {
            spanned.apply_span(range.clone(), style.clone()).unwrap();
        }

        let typesetter = Typesetter::new(
            spanned,
            ParagraphCollection::new(paragraphs).unwrap(),
            RunCollection::new(runs).unwrap(),
            BreakTable::new(flags),
        )
        .unwrap();
        match self.token {
            Some(token) => typesetter.with_truncation_token(token),
            None => typesetter,
        }
    }

    fn metrics_at(&self, index: usize) -> RunMetrics {
        self.metrics
            .iter()
            .rev()
            .find(|(range, _)| range.contains(&index))
            .map_or(METRICS, |(_, metrics)| *metrics)
    }
}

/// Creates a resolver composing into `width` x `height` at the origin.
pub(crate) fn resolver(
    typesetter: &Typesetter<String>,
    width: f32,
    height: f32,
) -> FrameResolver<'_, String> {
    let mut resolver = FrameResolver::new(typesetter);
    resolver.set_frame_rect(FrameRect::new(0.0, 0.0, width, height));
    resolver
}
