// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::vec::Vec;

use core::ops::Range;

use crate::{
    BreakMode, ComposedLine, LineItem, RunMetrics, TextAlignment, TruncationPlace,
    TruncationToken,
};

use super::utils::{assert_frame_invariants, line_ranges, resolver, words, TestEnv};

/// A visual item, with text reduced to its range.
#[derive(Debug, PartialEq)]
enum Piece {
    Text(Range<usize>),
    Token(char),
}

fn pieces(line: &ComposedLine) -> Vec<Piece> {
    line.items()
        .iter()
        .map(|item| match item {
            LineItem::Text { char_range, .. } => Piece::Text(char_range.clone()),
            LineItem::Token { glyph, .. } => Piece::Token(*glyph),
        })
        .collect()
}

const ELLIPSIS: Piece = Piece::Token('\u{2026}');

#[test]
fn max_lines_truncates_end() {
    let typesetter = TestEnv::new(&words(50)).build();
    let mut resolver = resolver(&typesetter, 100.0, 0.0);
    resolver.set_max_lines(2);
    resolver.set_truncation_mode(BreakMode::Character);
    resolver.set_truncation_place(Some(TruncationPlace::End));

    let frame = resolver.create_frame(0..50).unwrap();
    assert_frame_invariants(&frame, 0, "max_lines_truncates_end");
    assert_eq!(line_ranges(&frame), [0..10, 10..50]);
    let last = &frame.lines()[1];
    assert!(last.contains_truncation_token());
    assert_eq!(pieces(last), [Piece::Text(10..19), ELLIPSIS]);
    assert_eq!(last.extent(), 100.0);
    assert_eq!(last.origin_y(), 18.0);
    assert!(!frame.lines()[0].contains_truncation_token());
}

#[test]
fn truncates_start_and_middle() {
    let text = "abcdefghi abcdefghi abcdefghi";
    let typesetter = TestEnv::new(text).build();
    let mut resolver = resolver(&typesetter, 100.0, 0.0);
    resolver.set_max_lines(1);

    resolver.set_truncation_place(Some(TruncationPlace::Start));
    let frame = resolver.create_frame(0..29).unwrap();
    assert_eq!(line_ranges(&frame), [0..29]);
    assert_eq!(pieces(&frame.lines()[0]), [ELLIPSIS, Piece::Text(20..29)]);

    resolver.set_truncation_place(Some(TruncationPlace::Middle));
    let frame = resolver.create_frame(0..29).unwrap();
    assert_eq!(
        pieces(&frame.lines()[0]),
        [Piece::Text(0..4), ELLIPSIS, Piece::Text(24..29)]
    );
    assert_eq!(frame.lines()[0].extent(), 100.0);
}

#[test]
fn truncation_can_be_disabled() {
    let typesetter = TestEnv::new(&words(50)).build();
    let mut resolver = resolver(&typesetter, 100.0, 0.0);
    resolver.set_max_lines(1);
    resolver.set_truncation_place(None);

    let frame = resolver.create_frame(0..50).unwrap();
    assert_eq!(line_ranges(&frame), [0..10]);
    assert!(!frame.lines()[0].contains_truncation_token());
}

#[test]
fn complete_frames_are_not_truncated() {
    let typesetter = TestEnv::new(&words(30)).build();
    let resolver = resolver(&typesetter, 100.0, 0.0);
    let frame = resolver.create_frame(0..30).unwrap();
    assert_eq!(line_ranges(&frame), [0..10, 10..20, 20..30]);
    assert!(frame
        .lines()
        .iter()
        .all(|line| !line.contains_truncation_token()));
}

#[test]
fn height_overflow_truncates_last_fitting_line() {
    let typesetter = TestEnv::new(&words(50)).build();
    let resolver = resolver(&typesetter, 100.0, 25.0);

    let frame = resolver.create_frame(0..50).unwrap();
    assert_frame_invariants(&frame, 0, "height_overflow_truncates_last_fitting_line");
    assert_eq!(line_ranges(&frame), [0..10, 10..50]);
    assert_eq!(pieces(&frame.lines()[1]), [Piece::Text(10..19), ELLIPSIS]);
    assert_eq!(frame.lines()[1].origin_y(), 18.0);
    assert_eq!(frame.height(), 25.0);
}

#[test]
fn truncated_content_stays_in_its_paragraph() {
    let typesetter = TestEnv::new("abc\ndef\nghi").build();
    let mut resolver = resolver(&typesetter, 100.0, 0.0);
    resolver.set_max_lines(1);

    let frame = resolver.create_frame(0..11).unwrap();
    assert_eq!(line_ranges(&frame), [0..11]);
    assert_eq!(pieces(&frame.lines()[0]), [Piece::Text(0..3), ELLIPSIS]);
}

#[test]
fn truncation_without_token_only_cuts() {
    let typesetter = TestEnv::new(&words(50)).without_token().build();
    let mut resolver = resolver(&typesetter, 100.0, 0.0);
    resolver.set_max_lines(2);
    resolver.set_truncation_mode(BreakMode::Character);

    let frame = resolver.create_frame(0..50).unwrap();
    assert_eq!(line_ranges(&frame), [0..10, 10..50]);
    assert_eq!(pieces(&frame.lines()[1]), [Piece::Text(10..19)]);
}

#[test]
fn truncated_line_keeps_flush_factor() {
    let typesetter = TestEnv::new(&words(50)).build();
    let mut resolver = resolver(&typesetter, 100.0, 0.0);
    resolver.set_text_alignment(TextAlignment::Right);
    resolver.set_max_lines(2);
    resolver.set_truncation_mode(BreakMode::Character);

    let frame = resolver.create_frame(0..50).unwrap();
    // The first line's trailing space hangs past the right edge.
    assert_eq!(frame.lines()[0].origin_x(), 10.0);
    // The truncated line fills the extent exactly.
    assert_eq!(frame.lines()[1].extent(), 100.0);
    assert_eq!(frame.lines()[1].origin_x(), 0.0);

    resolver.set_text_alignment(TextAlignment::Center);
    resolver.set_truncation_place(Some(TruncationPlace::Start));
    let frame = resolver.create_frame(0..50).unwrap();
    let last = &frame.lines()[1];
    assert_eq!(pieces(last), [ELLIPSIS, Piece::Text(41..50)]);
    // Content is 90 wide once the final space hangs.
    assert_eq!(last.trailing_whitespace_extent(), 10.0);
    assert_eq!(last.origin_x(), 5.0);
}

#[test]
fn tall_token_backs_off_to_a_fitting_line() {
    let token = TruncationToken::ellipsis(
        10.0,
        RunMetrics {
            ascent: 14.0,
            descent: 2.0,
            leading: 0.0,
        },
    );
    let typesetter = TestEnv::new(&words(50)).token(token).build();
    let mut resolver = resolver(&typesetter, 100.0, 20.0);
    resolver.set_truncation_mode(BreakMode::Character);

    // Two text lines fit, but the second one grows to 16 once truncated.
    let frame = resolver.create_frame(0..50).unwrap();
    assert_frame_invariants(&frame, 0, "tall_token_backs_off_to_a_fitting_line");
    assert_eq!(line_ranges(&frame), [0..50]);
    let line = &frame.lines()[0];
    assert_eq!(pieces(line), [Piece::Text(0..9), ELLIPSIS]);
    assert_eq!(line.origin_y(), 14.0);
    assert!(line.bottom() <= frame.height());

    // Three lines fit 30, but a truncated third would not.
    let resolver = self::resolver(&typesetter, 100.0, 30.0);
    let frame = resolver.create_frame(0..50).unwrap();
    assert_eq!(line_ranges(&frame), [0..10, 10..50]);
    assert_eq!(frame.lines()[1].bottom(), 26.0);
}
