// ABOUTME: Lexical line classification for table discovery
// ABOUTME: Decides border line vs data line vs ordinary text with no lookahead
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Table line detection.
//!
//! Classification is purely local: each line is judged on its own
//! characters, which keeps table-boundary discovery a single forward scan.

use crate::boxdraw;

/// Classification of a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Top, bottom, or interior separator row of a table.
    Border,
    /// A data row delimited by vertical bars.
    Data,
    /// Ordinary text, including blank lines.
    Text,
}

/// Classify one line.
#[must_use]
pub fn classify(line: &str) -> LineClass {
    if is_border_line(line) {
        LineClass::Border
    } else if is_data_line(line) {
        LineClass::Data
    } else {
        LineClass::Text
    }
}

/// A border line starts (after trimming) with a corner or left-tee glyph and
/// is more than 40% horizontal-rule glyphs. The threshold tolerates label
/// text embedded in a titled separator row while rejecting lines that merely
/// begin with a similar glyph.
#[must_use]
pub fn is_border_line(line: &str) -> bool {
    let trimmed = line.trim();
    let Some(first) = trimmed.chars().next() else {
        return false;
    };
    if !boxdraw::is_border_start(first) {
        return false;
    }
    let total = trimmed.chars().count();
    let horizontal = trimmed
        .chars()
        .filter(|&c| boxdraw::is_horizontal(c))
        .count();
    // fraction strictly above 0.4, computed in integers
    horizontal * 10 > total * 4
}

/// A data line starts and ends (after trimming) with a vertical-bar glyph.
#[must_use]
pub fn is_data_line(line: &str) -> bool {
    let trimmed = line.trim();
    match (trimmed.chars().next(), trimmed.chars().last()) {
        (Some(first), Some(last)) => boxdraw::is_vertical(first) && boxdraw::is_vertical(last),
        _ => false,
    }
}

/// True for any line that belongs to a table (border or data). Used by the
/// wrapper to leave tables untouched.
#[must_use]
pub fn is_table_line(line: &str) -> bool {
    is_border_line(line) || is_data_line(line)
}
