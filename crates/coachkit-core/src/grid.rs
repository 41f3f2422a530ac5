// ABOUTME: Column grid extraction from border lines
// ABOUTME: Holds the authoritative separator offsets for one table block
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Column-grid extraction.
//!
//! A border line yields the `char` offsets of every corner, tee, or cross
//! glyph. When several border lines delimit one block, the grid with the
//! most offsets wins: a fully-ruled separator row reveals sub-columns that
//! a sparse top or bottom border does not show.

use crate::boxdraw;

/// Expected separator offsets for the data rows of one table block.
///
/// Offsets are strictly increasing by construction, since they are
/// collected in a single left-to-right pass over a border line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnGrid {
    offsets: Vec<usize>,
}

impl ColumnGrid {
    /// Extract the grid from a border line.
    #[must_use]
    pub fn from_border_line(line: &str) -> Self {
        let offsets = line
            .chars()
            .enumerate()
            .filter(|&(_, c)| boxdraw::is_column_separator(c))
            .map(|(i, _)| i)
            .collect();
        Self { offsets }
    }

    /// Expected separator offsets, left to right.
    #[must_use]
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Number of expected separators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// True when the border line contained no separator glyphs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Adopt `other` only if it reveals strictly more columns. Equal counts
    /// keep the grid already seen, so the first border line wins ties.
    pub fn refine(&mut self, other: Self) {
        if other.len() > self.len() {
            *self = other;
        }
    }
}
