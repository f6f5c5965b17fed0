// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

/// Class of boundary a break may be taken at.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub enum BreakMode {
    /// Break between any two grapheme clusters.
    Character,
    /// Break only at line break opportunities.
    #[default]
    Line,
}

/// Where truncated content is replaced by the truncation token.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub enum TruncationPlace {
    /// Keep the end of the content and truncate its start.
    Start,
    /// Keep both ends of the content and truncate its middle.
    Middle,
    /// Keep the start of the content and truncate its end.
    #[default]
    End,
}

/// Boundary classes recorded for a byte position.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct BreakFlags(u8);

impl BreakFlags {
    /// No boundary.
    pub const NONE: Self = Self(0);
    /// A grapheme cluster boundary.
    pub const CHARACTER: Self = Self(1 << 0);
    /// A line break opportunity.
    pub const LINE: Self = Self(1 << 1);
    /// A hard line break; the line must end here.
    pub const MANDATORY: Self = Self(1 << 2);
    /// The byte starting at this position belongs to a whitespace character.
    pub const WHITESPACE: Self = Self(1 << 3);

    /// Returns the raw bits.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns `true` if all flags in `other` are set.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` if any flag in `other` is set.
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl core::ops::BitOr for BreakFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl core::ops::BitOrAssign for BreakFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl core::fmt::Debug for BreakFlags {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        const NAMES: [(BreakFlags, &str); 4] = [
            (BreakFlags::CHARACTER, "CHARACTER"),
            (BreakFlags::LINE, "LINE"),
            (BreakFlags::MANDATORY, "MANDATORY"),
            (BreakFlags::WHITESPACE, "WHITESPACE"),
        ];
        let mut list = f.debug_set();
        for (flag, name) in NAMES {
            if self.contains(flag) {
                list.entry(&format_args!("{name}"));
            }
        }
        list.finish()
    }
}

/// Boundary classes for every byte position of the typeset text.
///
/// Entry `i` describes the boundary before byte `i`, so a table for a text
/// of `n` bytes has `n + 1` entries. The `WHITESPACE` flag of entry `i`
/// describes the byte at `i` itself.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BreakTable {
    entries: Vec<BreakFlags>,
}

impl BreakTable {
    /// Creates a table from per-position flags.
    pub fn new(entries: Vec<BreakFlags>) -> Self {
        Self { entries }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the flags recorded at `index`.
    pub fn flags(&self, index: usize) -> BreakFlags {
        self.entries.get(index).copied().unwrap_or_default()
    }

    /// Returns `true` if a line may end at `index` under `mode`.
    pub fn allows_break(&self, index: usize, mode: BreakMode) -> bool {
        let flags = self.flags(index);
        match mode {
            BreakMode::Character => flags
                .intersects(BreakFlags::CHARACTER | BreakFlags::LINE | BreakFlags::MANDATORY),
            BreakMode::Line => flags.intersects(BreakFlags::LINE | BreakFlags::MANDATORY),
        }
    }

    /// Returns `true` if a line must end at `index`.
    pub fn is_mandatory(&self, index: usize) -> bool {
        self.flags(index).contains(BreakFlags::MANDATORY)
    }

    /// Returns `true` if the byte at `index` belongs to a whitespace character.
    pub fn is_whitespace(&self, index: usize) -> bool {
        self.flags(index).contains(BreakFlags::WHITESPACE)
    }
}
