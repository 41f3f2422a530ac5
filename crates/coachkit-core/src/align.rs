// ABOUTME: Row aligner and document-level alignment pass
// ABOUTME: Shifts data-row separators onto the block grid with cascading corrections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Table alignment.
//!
//! The document is scanned once. A border line opens a table block, which
//! extends while border or data lines continue and closes on the first
//! other line. The block is fully delimited (and its grid fully refined)
//! before any data row is rewritten, so rows collected before a fuller
//! separator row still align against the final grid.
//!
//! Row repair works left to right over an immutable input with an
//! append-only output buffer. Each correction in an earlier column moves
//! every later character by a known delta, tracked as a cumulative shift,
//! so only genuinely content-bound columns produce warnings.

use crate::boxdraw;
use crate::detect;
use crate::grid::ColumnGrid;
use crate::report::{AlignmentOutcome, LineFixes, LineWarnings};

/// Align every table data row in `text` to its block's column grid.
///
/// Non-table lines are returned byte-identical. Malformed table content
/// degrades to warnings, never errors: a data row whose separator count
/// disagrees with the grid is left unchanged with a single warning, and a
/// column whose content cannot shrink keeps its deficit with a shortfall
/// warning while the rest of the row is still corrected.
#[must_use]
pub fn fix_alignment(text: &str) -> AlignmentOutcome {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut result: Vec<String> = Vec::with_capacity(lines.len());
    let mut all_fixes = Vec::new();
    let mut all_warnings = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        if !detect::is_border_line(line) {
            result.push(line.to_owned());
            i += 1;
            continue;
        }

        // A border line opens a block: collect members until the table ends.
        let mut grid = ColumnGrid::from_border_line(line);
        let mut members: Vec<(usize, &str)> = vec![(i, line)];
        let mut j = i + 1;
        while j < lines.len() {
            let next = lines[j];
            if detect::is_border_line(next) {
                grid.refine(ColumnGrid::from_border_line(next));
                members.push((j, next));
            } else if detect::is_data_line(next) {
                members.push((j, next));
            } else {
                break;
            }
            j += 1;
        }

        for (line_no, member) in members {
            if detect::is_data_line(member) {
                let (fixed, fixes, warnings) = align_data_row(member, &grid);
                result.push(fixed);
                if !fixes.is_empty() {
                    all_fixes.push(LineFixes {
                        line: line_no + 1,
                        fixes,
                    });
                }
                if !warnings.is_empty() {
                    all_warnings.push(LineWarnings {
                        line: line_no + 1,
                        warnings,
                    });
                }
            } else {
                result.push(member.to_owned());
            }
        }
        i = j;
    }

    AlignmentOutcome {
        text: result.join("\n"),
        fixes: all_fixes,
        warnings: all_warnings,
    }
}

/// Rewrite one data row so its vertical bars sit at the grid offsets.
///
/// Returns the rewritten line plus the fix and warning messages for that
/// row. Only interior whitespace immediately preceding a separator is ever
/// inserted or removed; content tokens are never reordered or truncated.
pub(crate) fn align_data_row(
    line: &str,
    grid: &ColumnGrid,
) -> (String, Vec<String>, Vec<String>) {
    let chars: Vec<char> = line.chars().collect();
    let actual: Vec<usize> = chars
        .iter()
        .enumerate()
        .filter(|&(_, c)| boxdraw::is_vertical(*c))
        .map(|(i, _)| i)
        .collect();
    let expected = grid.offsets();

    if actual == expected {
        return (line.to_owned(), Vec::new(), Vec::new());
    }
    if actual.len() != expected.len() {
        // Ambiguous: never guess which cell is missing or extra.
        let warning = format!(
            "column count mismatch: expected {}, got {}",
            expected.len(),
            actual.len()
        );
        return (line.to_owned(), Vec::new(), vec![warning]);
    }

    let mut fixes = Vec::new();
    let mut warnings = Vec::new();
    let mut out = String::with_capacity(line.len());
    let mut shift: isize = 0;
    let mut cursor = 0_usize;

    for (col, (&expected_pos, &orig_pos)) in expected.iter().zip(actual.iter()).enumerate() {
        let segment = &chars[cursor..orig_pos];
        let actual_pos = isize::try_from(orig_pos).unwrap_or(isize::MAX) + shift;
        let delta = isize::try_from(expected_pos).unwrap_or(isize::MAX) - actual_pos;

        if delta == 0 {
            out.extend(segment.iter());
        } else if delta > 0 {
            out.extend(segment.iter());
            for _ in 0..delta {
                out.push(' ');
            }
            fixes.push(format!("col {}: added {delta} space(s)", col + 1));
            shift += delta;
        } else {
            let deficit = delta.unsigned_abs();
            let available = segment.iter().rev().take_while(|&&c| c == ' ').count();
            let removed = deficit.min(available);
            if removed > 0 {
                out.extend(segment[..segment.len() - removed].iter());
                fixes.push(format!("col {}: removed {removed} space(s)", col + 1));
                shift -= isize::try_from(removed).unwrap_or(0);
            } else {
                // Content is too long for the column; leave the deficit in
                // place rather than hiding it, and do not fold it into the
                // cumulative shift as if it were fixed.
                out.extend(segment.iter());
                warnings.push(format!(
                    "col {}: content {deficit} char(s) too long (manual fix needed)",
                    col + 1
                ));
            }
        }
        out.push(chars[orig_pos]);
        cursor = orig_pos + 1;
    }
    out.extend(chars[cursor..].iter());

    (out, fixes, warnings)
}
