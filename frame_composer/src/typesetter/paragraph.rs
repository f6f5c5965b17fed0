// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::ops::Range;

use super::{TypesetError, TypesetErrorKind};

/// A paragraph produced by bidi resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BidiParagraph {
    char_range: Range<usize>,
    base_level: u8,
}

impl BidiParagraph {
    /// Creates a paragraph covering `char_range` with the given embedding level.
    pub fn new(char_range: Range<usize>, base_level: u8) -> Self {
        Self {
            char_range,
            base_level,
        }
    }

    /// Returns the byte range covered by the paragraph.
    pub fn char_range(&self) -> Range<usize> {
        self.char_range.clone()
    }

    /// Returns the first byte of the paragraph.
    pub fn char_start(&self) -> usize {
        self.char_range.start
    }

    /// Returns the byte after the end of the paragraph.
    pub fn char_end(&self) -> usize {
        self.char_range.end
    }

    /// Returns the base embedding level of the paragraph.
    pub fn base_level(&self) -> u8 {
        self.base_level
    }

    /// Returns `true` if the base direction of the paragraph is right-to-left.
    pub fn is_rtl(&self) -> bool {
        self.base_level & 1 != 0
    }
}

/// Ordered paragraphs partitioning the typeset text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParagraphCollection {
    paragraphs: Vec<BidiParagraph>,
}

impl ParagraphCollection {
    /// Creates a collection from paragraphs in text order.
    ///
    /// Paragraphs must be non-empty, start at zero and follow each other
    /// without gaps.
    pub fn new(paragraphs: Vec<BidiParagraph>) -> Result<Self, TypesetError> {
        let mut expected = 0;
        for (index, paragraph) in paragraphs.iter().enumerate() {
            if paragraph.char_start() != expected || paragraph.char_range.is_empty() {
                return Err(TypesetError::new(
                    TypesetErrorKind::DiscontiguousParagraphs,
                    index,
                    paragraph.char_range(),
                ));
            }
            expected = paragraph.char_end();
        }
        Ok(Self { paragraphs })
    }

    /// Returns the index of the paragraph containing `char_index`.
    ///
    /// An index equal to the end of a paragraph resolves to the paragraph
    /// after it. Returns `None` past the last paragraph.
    pub fn binary_search(&self, char_index: usize) -> Option<usize> {
        let index = self
            .paragraphs
            .partition_point(|paragraph| paragraph.char_end() <= char_index);
        (index < self.paragraphs.len()).then_some(index)
    }

    /// Returns the paragraph containing `char_index`.
    pub fn find(&self, char_index: usize) -> Option<&BidiParagraph> {
        self.binary_search(char_index)
            .map(|index| &self.paragraphs[index])
    }

    /// Returns the paragraph at `index`.
    pub fn get(&self, index: usize) -> Option<&BidiParagraph> {
        self.paragraphs.get(index)
    }

    /// Returns the number of paragraphs.
    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    /// Returns `true` if there are no paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Iterate over the paragraphs in text order.
    pub fn iter(&self) -> core::slice::Iter<'_, BidiParagraph> {
        self.paragraphs.iter()
    }

    /// Returns the byte after the end of the last paragraph.
    pub fn char_end(&self) -> usize {
        self.paragraphs.last().map_or(0, BidiParagraph::char_end)
    }
}

#[cfg(test)]
mod tests {
    use super::{BidiParagraph, ParagraphCollection};
    use crate::TypesetErrorKind;
    use alloc::vec;

    fn collection() -> ParagraphCollection {
        ParagraphCollection::new(vec![
            BidiParagraph::new(0..4, 0),
            BidiParagraph::new(4..10, 1),
            BidiParagraph::new(10..12, 0),
        ])
        .unwrap()
    }

    #[test]
    fn binary_search_resolves_ends_to_next_paragraph() {
        let paragraphs = collection();
        assert_eq!(paragraphs.binary_search(0), Some(0));
        assert_eq!(paragraphs.binary_search(3), Some(0));
        assert_eq!(paragraphs.binary_search(4), Some(1));
        assert_eq!(paragraphs.binary_search(9), Some(1));
        assert_eq!(paragraphs.binary_search(10), Some(2));
        assert_eq!(paragraphs.binary_search(12), None);
        assert!(paragraphs.find(5).unwrap().is_rtl());
        assert_eq!(paragraphs.char_end(), 12);
    }

    #[test]
    fn rejects_gaps_and_empty_paragraphs() {
        let err = ParagraphCollection::new(vec![
            BidiParagraph::new(0..4, 0),
            BidiParagraph::new(5..8, 0),
        ])
        .unwrap_err();
        assert_eq!(err.kind(), TypesetErrorKind::DiscontiguousParagraphs);
        assert_eq!(err.index(), 1);

        let err = ParagraphCollection::new(vec![BidiParagraph::new(0..0, 0)]).unwrap_err();
        assert_eq!(err.kind(), TypesetErrorKind::DiscontiguousParagraphs);
    }
}
